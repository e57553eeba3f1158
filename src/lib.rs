//! photo-annotator
//!
//! フォルダ内のJPEGを待ちリストに入れ、模擬物体検出の結果をJSON/HTMLで出力する

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod scanner;
