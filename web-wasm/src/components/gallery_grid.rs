//! ギャラリーグリッドコンポーネント
//!
//! カードは初期化時に全件生成し、絞り込みでは `hidden` クラスだけを切り替える

use leptos::prelude::*;

use crate::bindings::CardItem;
use crate::pdf::open_pdf;

#[component]
pub fn GalleryGrid(cards: Vec<CardItem>) -> impl IntoView {
    view! {
        <div class="gallery-grid" id="gallery-grid">
            {cards
                .into_iter()
                .map(|card| view! { <ImageCard card=card /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ImageCard(card: CardItem) -> impl IntoView {
    let CardItem { document, visible } = card;
    let pdf_path = document.pdf_path.clone();
    let data_pdf = document.pdf_path.clone();
    let aria_label = format!("Open PDF for {}", document.label);

    view! {
        <article
            class="image-card"
            class:hidden=move || !visible.get()
            data-filename=document.filename.clone()
        >
            <div class="image-wrapper">
                <img src=document.image_path.clone() alt=document.label.clone() loading="lazy" />
            </div>
            <div class="card-metadata">
                <div class="card-filename">{document.label.clone()}</div>
                <div class="card-info">
                    <div class="card-info-item">
                        <span class="card-info-value">{document.filename.clone()}</span>
                    </div>
                </div>
                <button
                    class="pdf-link-button"
                    data-pdf=data_pdf
                    aria-label=aria_label
                    on:click=move |ev| {
                        ev.stop_propagation();
                        open_pdf(&pdf_path);
                    }
                >
                    "📄 Open PDF"
                </button>
            </div>
        </article>
    }
}
