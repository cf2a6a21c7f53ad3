use anyhow::Context;
use clap::Parser;
use p064_gallery::{assets, cli, config, error, gallery, logging, picker};
use cli::{Cli, Commands};
use config::Config;
use gallery::FilterRequest;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;
    let data_path = config.data_path(cli.data.as_deref());

    match cli.command {
        Commands::List { limit } => {
            let controller = gallery::open(&config.gallery, &data_path)?;
            let documents = controller.documents();
            let limit = limit.unwrap_or(documents.len());

            println!("{}", p064_gallery_common::display::result_count_text(documents.len()));
            for doc in documents.iter().take(limit) {
                println!("{}", gallery::document_line(doc));
            }
            if limit < documents.len() {
                println!("... 他 {}件", documents.len() - limit);
            }
        }

        Commands::Filter { taluko, gaam, search, count_only } => {
            let mut controller = gallery::open(&config.gallery, &data_path)?;
            let request = FilterRequest { taluko, gaam, search };
            let view = gallery::apply_filters(&mut controller, &request)?;
            println!("{}", gallery::render_view(&view, controller.documents(), count_only));
        }

        Commands::Options { taluko } => {
            let mut controller = gallery::open(&config.gallery, &data_path)?;
            if !controller.filters_enabled() {
                return Err(error::GalleryError::LocationDataRequired.into());
            }

            if taluko.is_none() {
                println!("Taluko:");
                for t in controller.taluko_options() {
                    println!("  {}", t);
                }
            }

            controller.select_taluko(taluko.as_deref())?;
            match &taluko {
                Some(t) => println!("Gaam ({}):", t),
                None => println!("Gaam:"),
            }
            for g in controller.gaam_options() {
                println!("  {}", g);
            }
        }

        Commands::Stats => {
            let controller = gallery::open(&config.gallery, &data_path)?;
            let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
            println!("{}", gallery::render_statistics(&controller.statistics(), &generated_at));
        }

        Commands::Pick => {
            println!("📂 p064-gallery - 対話式絞り込み\n");
            let mut controller = gallery::open(&config.gallery, &data_path)?;
            picker::run_interactive_pick(&mut controller)?;
        }

        Commands::Check { images, pdfs, verify_images } => {
            let images = images.or_else(|| config.image_folder.clone());
            let pdfs = pdfs.or_else(|| config.pdf_folder.clone());
            if images.is_none() && pdfs.is_none() {
                return Err(error::GalleryError::Config(
                    "--images / --pdfs を指定するか、config --set-image-folder / --set-pdf-folder で設定してください".into(),
                )
                .into());
            }

            println!("🔍 p064-gallery - アセット検証\n");
            let documents = p064_gallery_common::DocumentSet::generate(&config.gallery)?;
            let report = assets::check_assets(
                &documents,
                &config.gallery,
                images.as_deref(),
                pdfs.as_deref(),
                verify_images,
            )?;

            println!("文書数: {}", report.checked);
            if images.is_some() {
                println!("画像欠落: {}件", report.missing_images.len());
                for id in &report.missing_images {
                    println!("  - {}", id);
                }
            }
            if pdfs.is_some() {
                println!("PDF欠落: {}件", report.missing_pdfs.len());
                for id in &report.missing_pdfs {
                    println!("  - {}", id);
                }
            }
            if verify_images {
                println!("読み込めない画像: {}件", report.unreadable_images.len());
                for (id, reason) in &report.unreadable_images {
                    println!("  - {}: {}", id, reason);
                }
            }
            if !report.unexpected.is_empty() {
                println!("対象外のファイル: {}件", report.unexpected.len());
                for path in &report.unexpected {
                    println!("  - {}", path.display());
                }
            }

            if report.is_ok() {
                println!("\n✅ すべて揃っています");
            } else {
                println!("\n⚠ 欠落があります");
            }
        }

        Commands::Config { show, set_image_folder, set_pdf_folder, set_data } => {
            let mut config = config;
            let changed =
                set_image_folder.is_some() || set_pdf_folder.is_some() || set_data.is_some();

            if let Some(folder) = set_image_folder {
                println!("✔ 画像フォルダを設定しました: {}", folder.display());
                config.image_folder = Some(folder);
            }
            if let Some(folder) = set_pdf_folder {
                println!("✔ PDFフォルダを設定しました: {}", folder.display());
                config.pdf_folder = Some(folder);
            }
            if let Some(path) = set_data {
                println!("✔ 位置データを設定しました: {}", path);
                config.gallery.data_path = path;
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                let folder = |p: &Option<std::path::PathBuf>| {
                    p.as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                };
                println!("設定:");
                println!("  接頭辞: {}", config.gallery.prefix);
                println!("  文書数: {}", config.gallery.document_count);
                println!("  画像パス: {}", config.gallery.image_dir);
                println!("  PDFパス: {}", config.gallery.pdf_dir);
                println!("  位置データ: {}", config.gallery.data_path);
                println!("  検索待機: {}ms", config.gallery.search_debounce_ms);
                println!("  画像フォルダ: {}", folder(&config.image_folder));
                println!("  PDFフォルダ: {}", folder(&config.pdf_folder));
            }
        }
    }

    Ok(())
}
