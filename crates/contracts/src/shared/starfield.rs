//! Decorative background of the landing page.
//!
//! Generation is a pure function of the seed so the same seed always yields
//! the same field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_ELEMENTS: usize = 20;
pub const DEFAULT_TWINKLES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceIcon {
    Badge,
    Star,
    Circle,
    Diamond,
    Sparkles,
}

impl SpaceIcon {
    pub const ALL: [SpaceIcon; 5] = [
        SpaceIcon::Badge,
        SpaceIcon::Star,
        SpaceIcon::Circle,
        SpaceIcon::Diamond,
        SpaceIcon::Sparkles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpaceIcon::Badge => "badge",
            SpaceIcon::Star => "star",
            SpaceIcon::Circle => "circle",
            SpaceIcon::Diamond => "diamond",
            SpaceIcon::Sparkles => "sparkles",
        }
    }
}

/// Floating icon; positions are percentages of the viewport, times in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceElement {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub delay: f64,
    pub duration: f64,
    pub icon: SpaceIcon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Twinkle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub duration: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub elements: Vec<SpaceElement>,
    pub twinkles: Vec<Twinkle>,
}

pub fn starfield(seed: u64, elements: usize, twinkles: usize) -> Starfield {
    let mut rng = StdRng::seed_from_u64(seed);

    let elements = (0..elements)
        .map(|id| SpaceElement {
            id,
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 100.0,
            size: rng.gen::<f64>() * 16.0 + 8.0,
            opacity: rng.gen::<f64>() * 0.7 + 0.3,
            delay: rng.gen::<f64>() * 2.0,
            duration: rng.gen::<f64>() * 3.0 + 2.0,
            icon: SpaceIcon::ALL[rng.gen_range(0..SpaceIcon::ALL.len())],
        })
        .collect();

    let twinkles = (0..twinkles)
        .map(|id| Twinkle {
            id,
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 100.0,
            duration: rng.gen::<f64>() * 3.0 + 1.0,
            delay: rng.gen::<f64>() * 2.0,
        })
        .collect();

    Starfield { elements, twinkles }
}
