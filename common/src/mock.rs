//! 模擬物体検出
//!
//! 実際の推論は行わず、固定語彙からのランダムなタグと
//! ランダムな検出枠をファイルごとに生成する。

use crate::error::Result;
use crate::preview::PreviewFactory;
use crate::types::{AnnotationResult, BoundingBox, PendingFile};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

/// タグ語彙
pub const TAG_VOCABULARY: &[&str] = &[
    "Person", "Car", "Building", "Tree", "Animal", "Phone", "Chair", "Table", "Computer",
];

/// 1結果あたりのタグ抽選回数
pub const TAG_DRAWS: RangeInclusive<usize> = 1..=3;

/// 1結果あたりの枠数
pub const BOX_COUNT: RangeInclusive<usize> = 1..=2;

/// 枠の位置 (x, y) の範囲 [%]
pub const BOX_POSITION: Range<f64> = 10.0..80.0;

/// 枠のサイズ (width, height) の範囲 [%]
pub const BOX_EXTENT: Range<f64> = 10.0..40.0;

/// 模擬アノテータ
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnnotator;

impl MockAnnotator {
    /// タグを抽選（重複した抽選は捨てるので1〜3個）
    pub fn generate_tags<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let draws = rng.gen_range(TAG_DRAWS);
        let mut tags: Vec<String> = Vec::with_capacity(draws);

        for _ in 0..draws {
            if let Some(tag) = TAG_VOCABULARY.choose(rng) {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }

        tags
    }

    /// 枠を生成。ラベルは `tags` から選ぶ
    pub fn generate_boxes<R: Rng + ?Sized>(&self, tags: &[String], rng: &mut R) -> Vec<BoundingBox> {
        let count = rng.gen_range(BOX_COUNT);

        (0..count)
            .filter_map(|_| {
                let label = tags.choose(rng)?.clone();
                Some(BoundingBox {
                    x: rng.gen_range(BOX_POSITION),
                    y: rng.gen_range(BOX_POSITION),
                    width: rng.gen_range(BOX_EXTENT),
                    height: rng.gen_range(BOX_EXTENT),
                    label,
                })
            })
            .collect()
    }

    /// 1ファイル分の結果
    pub fn annotate_file<R, P>(&self, file: &PendingFile, previews: &P, rng: &mut R) -> Result<AnnotationResult>
    where
        R: Rng + ?Sized,
        P: PreviewFactory + ?Sized,
    {
        let preview = previews.create(file)?;
        let tags = self.generate_tags(rng);
        let boxes = self.generate_boxes(&tags, rng);

        Ok(AnnotationResult {
            name: file.name().to_string(),
            preview: Arc::new(preview),
            tags,
            boxes,
        })
    }

    /// 入力順に1ファイル1結果
    pub fn annotate_with<R, P>(&self, files: &[PendingFile], previews: &P, rng: &mut R) -> Result<Vec<AnnotationResult>>
    where
        R: Rng + ?Sized,
        P: PreviewFactory + ?Sized,
    {
        files
            .iter()
            .map(|file| self.annotate_file(file, previews, rng))
            .collect()
    }

    pub fn annotate<P>(&self, files: &[PendingFile], previews: &P) -> Result<Vec<AnnotationResult>>
    where
        P: PreviewFactory + ?Sized,
    {
        self.annotate_with(files, previews, &mut rand::thread_rng())
    }
}
