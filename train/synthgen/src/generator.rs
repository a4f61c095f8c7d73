use anyhow::Result;
use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, trace, warn};
use placer::{Annotation, Placer, ShapeKind, ShapeLimits};
use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};
use rand_xoshiro::SplitMix64;
use rayon::prelude::*;

use crate::{
    config::{GenConfig, MIN_OBJECTS},
    fonts::FontCache,
    io::{self, IMAGES_DIR, OutputError, PREVIEW_DIR},
    preview::render_preview,
    record::Dataset,
};

/// One rendered image and what ended up on it.
pub struct DatasetItem {
    pub image: RgbImage,
    pub annotations: Vec<Annotation>,
    /// Object count drawn for this image; exhausted slots make `annotations` shorter.
    pub requested: u32,
}

pub struct DatasetBuilder<'a> {
    config: &'a GenConfig,
    limits: ShapeLimits,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(config: &'a GenConfig) -> Result<Self> {
        let limits = config.validate()?;
        Ok(Self { config, limits })
    }

    /// Per-image seed, independent of the order images are processed in.
    pub fn item_seed(&self, index: usize) -> u64 {
        let mut sm = SplitMix64::seed_from_u64(self.config.seed.wrapping_add(index as u64));
        sm.next_u64()
    }

    pub fn generate_item(&self, placer: &mut Placer, seed: u64) -> DatasetItem {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut canvas = placer.canvas();
        let requested = rng.random_range(MIN_OBJECTS..=self.config.max_objects);

        let mut annotations = Vec::with_capacity(requested as usize);
        for slot in 0..requested {
            let kind = ShapeKind::random(&mut rng);
            match placer.place(kind, &mut canvas, &mut rng) {
                Some(ann) => annotations.push(ann),
                None => trace!("slot {slot}: no room for a {kind}"),
            }
        }

        DatasetItem {
            image: canvas.into_image(),
            annotations,
            requested,
        }
    }

    /// Generates every image, writes them and the manifest under `out_dir`.
    pub fn run(&self) -> Result<Dataset> {
        let cfg = self.config;
        let out_dir = cfg.out_dir.as_path();
        io::init_output(out_dir, cfg.preview > 0)?;

        let fonts = FontCache::load(&cfg.font_dir);
        if cfg.preview > 0 && fonts.first().is_none() {
            warn!(
                "no usable font in {}, preview labels are drawn without text",
                cfg.font_dir.display()
            );
        }

        info!(
            "generating {} images of {}x{} (up to {} objects each, seed {}) into {}",
            cfg.num_samples,
            cfg.side,
            cfg.side,
            cfg.max_objects,
            cfg.seed,
            out_dir.display()
        );

        let progress = ProgressBar::new(cfg.num_samples as u64);
        progress.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} [{elapsed_precise}<{eta_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let items = (0..cfg.num_samples)
            .into_par_iter()
            .map_init(
                || Placer::new(self.limits.clone()),
                |placer, index| -> Result<(String, Vec<Annotation>, u32), OutputError> {
                    let item = self.generate_item(placer, self.item_seed(index));
                    let name = io::image_name(index);
                    io::save_png(&item.image, &out_dir.join(IMAGES_DIR).join(&name))?;
                    if index < cfg.preview {
                        let boxed = render_preview(&item.image, &item.annotations, fonts.first());
                        io::save_png(&boxed, &out_dir.join(PREVIEW_DIR).join(&name))?;
                    }
                    debug!(
                        "{name}: {}/{} objects placed",
                        item.annotations.len(),
                        item.requested
                    );
                    progress.inc(1);
                    Ok((name, item.annotations, item.requested))
                },
            )
            .collect::<Result<Vec<_>, _>>();
        progress.finish_and_clear();
        let items = items?;

        let mut dataset = Dataset::default();
        let mut requested = 0u64;
        for (name, anns, asked) in items {
            requested += u64::from(asked);
            dataset.push(name, anns);
        }

        let manifest = io::write_dataset(out_dir, &dataset)?;
        let placed = dataset.count(ShapeKind::Circle) + dataset.count(ShapeKind::Rectangle);
        info!(
            "wrote {} images and {}: {} circles, {} rectangles, {} slots skipped",
            dataset.len(),
            manifest.display(),
            dataset.count(ShapeKind::Circle),
            dataset.count(ShapeKind::Rectangle),
            requested - placed as u64
        );

        Ok(dataset)
    }
}
