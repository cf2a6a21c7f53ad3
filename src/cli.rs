use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "p064-gallery")]
#[command(about = "P064 スキャン文書ギャラリーの絞り込み・検証ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 位置データJSON（デフォルト: 設定の dataPath）
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 文書一覧を表示
    List {
        /// 表示件数の上限
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// taluko / gaam / 検索語で絞り込み
    Filter {
        /// taluko
        #[arg(short, long)]
        taluko: Option<String>,

        /// gaam
        #[arg(short, long)]
        gaam: Option<String>,

        /// 検索語（ファイル名・表示ラベルの部分一致）
        #[arg(short, long)]
        search: Option<String>,

        /// 一致した文書IDを表示しない
        #[arg(long)]
        count_only: bool,
    },

    /// taluko と gaam の選択肢を表示
    Options {
        /// この taluko に属する gaam のみ表示
        #[arg(short, long)]
        taluko: Option<String>,
    },

    /// 統計情報を表示
    Stats,

    /// 対話的に taluko → gaam → 検索語を選んで絞り込み
    Pick,

    /// 画像・PDFフォルダと文書セットの対応を検証
    Check {
        /// 画像フォルダ
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// PDFフォルダ
        #[arg(short, long)]
        pdfs: Option<PathBuf>,

        /// 画像を読み込んでサイズを確認
        #[arg(long)]
        verify_images: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 画像フォルダを設定
        #[arg(long)]
        set_image_folder: Option<PathBuf>,

        /// PDFフォルダを設定
        #[arg(long)]
        set_pdf_folder: Option<PathBuf>,

        /// 位置データJSONのパスを設定
        #[arg(long)]
        set_data: Option<String>,
    },
}
