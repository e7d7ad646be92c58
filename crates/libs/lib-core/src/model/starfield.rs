//! Starfield generator.
//!
//! Stars never move on their own; the `twinkle` CSS keyframes animate them.
//! Every call to [`StarfieldGenerator::populate`] throws the previous batch
//! away and draws a new one, so a container never holds more than one batch.

use log::debug;

use crate::config::StarfieldConfig;
use crate::error::Result;

use super::{random_star_color, Container, RandomSource};

pub const STAR_CLASS: &str = "star";

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub width_px: f64,
    pub height_px: f64,
    /// Horizontal position, percent of the container.
    pub x_pct: f64,
    pub y_pct: f64,
    pub color: String,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Star {
    pub fn random<R: RandomSource + ?Sized>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let color = random_star_color(&config.palette, rng).unwrap_or("#ffffff").to_string();
        Self {
            width_px: config.size_px.sample(rng),
            height_px: config.size_px.sample(rng),
            x_pct: rng.next_f64() * 100.0,
            y_pct: rng.next_f64() * 100.0,
            color,
            duration_s: config.duration_s.sample(rng),
            delay_s: config.delay_s.sample(rng),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {}px; height: {}px; background: {}; border-radius: 50%; \
             left: {}%; top: {}%; animation: twinkle {}s ease-in-out infinite alternate; \
             animation-delay: {}s;",
            self.width_px,
            self.height_px,
            self.color,
            self.x_pct,
            self.y_pct,
            self.duration_s,
            self.delay_s
        )
    }
}

pub struct StarfieldGenerator<'a> {
    config: &'a StarfieldConfig,
}

impl<'a> StarfieldGenerator<'a> {
    pub fn new(config: &'a StarfieldConfig) -> Self {
        Self { config }
    }

    /// Draw a full batch without touching any container.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<Star> {
        (0..self.config.count).map(|_| Star::random(self.config, rng)).collect()
    }

    /// Replace the container's children with a fresh batch.
    ///
    /// An absent container is a no-op and yields an empty batch.
    pub fn populate<C, R>(&self, container: Option<&C>, rng: &mut R) -> Result<Vec<Star>>
    where
        C: Container,
        R: RandomSource + ?Sized,
    {
        let Some(container) = container else {
            debug!("starfield container not mounted, skipping");
            return Ok(Vec::new());
        };

        container.clear()?;
        let stars = self.generate(rng);
        for star in &stars {
            container.append(STAR_CLASS, &star.style())?;
        }
        debug!("starfield populated with {} stars", stars.len());
        Ok(stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STAR_PALETTE;
    use crate::model::MemoryContainer;

    #[test]
    fn test_populate_creates_exact_batch_within_ranges() {
        let config = StarfieldConfig::default();
        let container = MemoryContainer::new();
        let mut rng = fastrand::Rng::with_seed(1);

        let stars = StarfieldGenerator::new(&config)
            .populate(Some(&container), &mut rng)
            .unwrap();

        assert_eq!(stars.len(), 100);
        assert_eq!(container.len(), 100);
        for star in &stars {
            assert!((1.0..4.0).contains(&star.width_px));
            assert!((1.0..4.0).contains(&star.height_px));
            assert!((0.0..100.0).contains(&star.x_pct));
            assert!((0.0..100.0).contains(&star.y_pct));
            assert!((2.0..5.0).contains(&star.duration_s));
            assert!((0.0..2.0).contains(&star.delay_s));
            assert!(STAR_PALETTE.contains(&star.color.as_str()));
        }
        assert!(container.children().iter().all(|node| node.class_name == STAR_CLASS));
    }

    #[test]
    fn test_repopulate_replaces_previous_batch() {
        let config = StarfieldConfig::default();
        let container = MemoryContainer::new();
        let mut rng = fastrand::Rng::with_seed(2);
        let generator = StarfieldGenerator::new(&config);

        generator.populate(Some(&container), &mut rng).unwrap();
        let first_ids: Vec<u64> = container.children().iter().map(|n| n.id).collect();

        generator.populate(Some(&container), &mut rng).unwrap();
        assert_eq!(container.len(), 100);
        assert!(first_ids.iter().all(|id| !container.contains(*id)));
    }

    #[test]
    fn test_missing_container_is_noop() {
        let config = StarfieldConfig::default();
        let mut rng = fastrand::Rng::with_seed(3);
        let stars = StarfieldGenerator::new(&config)
            .populate::<MemoryContainer, _>(None, &mut rng)
            .unwrap();
        assert!(stars.is_empty());
    }

    #[test]
    fn test_style_carries_every_attribute() {
        let star = Star {
            width_px: 2.5,
            height_px: 1.5,
            x_pct: 10.0,
            y_pct: 20.0,
            color: "#ffd23f".to_string(),
            duration_s: 3.0,
            delay_s: 0.5,
        };
        let style = star.style();
        assert!(style.contains("width: 2.5px"));
        assert!(style.contains("height: 1.5px"));
        assert!(style.contains("background: #ffd23f"));
        assert!(style.contains("left: 10%"));
        assert!(style.contains("twinkle 3s"));
        assert!(style.contains("animation-delay: 0.5s"));
    }
}
