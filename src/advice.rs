//! Threshold rules that turn [`QualityMetrics`] into advice.
//!
//! ## Rules
//!
//! Evaluated independently, in this order:
//!
//! | # | Condition | Advice |
//! |---|---|---|
//! | 1 | brightness < 80 | [`Advice::IncreaseBrightness`] |
//! | 1 | brightness > 150 | [`Advice::ReduceBrightness`] |
//! | 2 | contrast < 30 | [`Advice::IncreaseContrast`] |
//! | 3 | sharpness < 400 | [`Advice::ImproveSharpness`] |
//! | 4 | noise > 50 | [`Advice::ReduceNoise`] |
//! | 5 | none of the above | [`Advice::WithinIdeal`] |
//!
//! The focus verdict is separate: sharpness below 500 means
//! [`FocusVerdict::OutOfFocus`]. An image between 400 and 500 gets no
//! sharpness advice but is still flagged as possibly out of focus.
//!
//! Every advice kind maps to a fixed Portuguese / English text pair.

use crate::metrics::QualityMetrics;
use serde::Serialize;

/// Decision thresholds. Fixed for the whole program; see [`Thresholds::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub brightness_min: f64,
    pub brightness_max: f64,
    pub contrast_min: f64,
    pub sharpness_min: f64,
    pub noise_max: f64,
    pub focus_min: f64,
}

impl Thresholds {
    pub const STANDARD: Self = Self {
        brightness_min: 80.0,
        brightness_max: 150.0,
        contrast_min: 30.0,
        sharpness_min: 400.0,
        noise_max: 50.0,
        focus_min: 500.0,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A piece of text in the two report languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BilingualText {
    /// Portuguese.
    #[serde(rename = "pt")]
    pub primary: &'static str,
    /// English.
    #[serde(rename = "en")]
    pub secondary: &'static str,
}

const fn text(primary: &'static str, secondary: &'static str) -> BilingualText {
    BilingualText { primary, secondary }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    IncreaseBrightness,
    ReduceBrightness,
    IncreaseContrast,
    /// Adjust focus or increase resolution.
    ImproveSharpness,
    /// Apply noise reduction or improve lighting.
    ReduceNoise,
    WithinIdeal,
}

impl Advice {
    pub fn text(self) -> BilingualText {
        match self {
            Advice::IncreaseBrightness => text(
                "Aumentar o brilho para melhorar a visibilidade.",
                "Increase brightness to improve visibility.",
            ),
            Advice::ReduceBrightness => text(
                "Reduzir o brilho para evitar sobreexposição.",
                "Reduce brightness to avoid overexposure.",
            ),
            Advice::IncreaseContrast => text(
                "Aumentar o contraste para melhorar a diferenciação de objetos.",
                "Increase contrast to enhance object differentiation.",
            ),
            Advice::ImproveSharpness => text(
                "Ajustar o foco ou aumentar a resolução para melhorar a nitidez.",
                "Adjust focus or increase resolution to improve sharpness.",
            ),
            Advice::ReduceNoise => text(
                "Aplicar filtro de redução de ruído ou melhorar a iluminação.",
                "Apply noise reduction filter or improve lighting.",
            ),
            Advice::WithinIdeal => text(
                "A imagem está dentro dos parâmetros ideais de qualidade.",
                "The image is within ideal quality parameters.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusVerdict {
    InFocus,
    OutOfFocus,
}

impl FocusVerdict {
    pub fn text(self) -> BilingualText {
        match self {
            FocusVerdict::InFocus => text("Imagem está em foco.", "Image is in focus."),
            FocusVerdict::OutOfFocus => text(
                "Imagem pode estar fora de foco. Considere ajustar a lente ou posição da câmera.",
                "Image may be out of focus. Consider adjusting the lens or camera position.",
            ),
        }
    }
}

/// Everything the advisor has to say about one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// Never empty: holds [`Advice::WithinIdeal`] alone when nothing fired.
    pub recommendations: Vec<Advice>,
    pub focus: FocusVerdict,
}

/// Apply rules 1–5 in order.
pub fn recommend(metrics: &QualityMetrics, thresholds: &Thresholds) -> Vec<Advice> {
    let mut advice = Vec::new();

    if metrics.brightness < thresholds.brightness_min {
        advice.push(Advice::IncreaseBrightness);
    } else if metrics.brightness > thresholds.brightness_max {
        advice.push(Advice::ReduceBrightness);
    }

    if metrics.contrast < thresholds.contrast_min {
        advice.push(Advice::IncreaseContrast);
    }

    if metrics.sharpness < thresholds.sharpness_min {
        advice.push(Advice::ImproveSharpness);
    }

    if metrics.noise > thresholds.noise_max {
        advice.push(Advice::ReduceNoise);
    }

    if advice.is_empty() {
        advice.push(Advice::WithinIdeal);
    }

    advice
}

pub fn focus_verdict(sharpness: f64, thresholds: &Thresholds) -> FocusVerdict {
    if sharpness < thresholds.focus_min {
        FocusVerdict::OutOfFocus
    } else {
        FocusVerdict::InFocus
    }
}

pub fn assess(metrics: &QualityMetrics, thresholds: &Thresholds) -> Assessment {
    Assessment {
        recommendations: recommend(metrics, thresholds),
        focus: focus_verdict(metrics.sharpness, thresholds),
    }
}
