// コマンドライン引数レイヤー

pub mod args;

pub use args::Cli;
