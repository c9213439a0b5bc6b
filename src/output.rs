//! Report formatting.
//!
//! # Text Report
//!
//! One block per image, printed as soon as the image is analyzed. Labels are
//! Portuguese; every advice line carries both languages.
//!
//! ```text
//! Imagem: gray.png
//! Brilho: 128.00, Contraste: 0.00, Nitidez: 0.00, Ruído: 0.00
//! Recomendações:
//!  - Aumentar o contraste ... (Português) / Increase contrast ... (English)
//!  - Ajustar o foco ... (Português) / Adjust focus ... (English)
//!  - Imagem pode estar fora de foco. ... (Português) / Image may be out of focus. ... (English)
//!
//! ==================================================
//!
//! ```
//!
//! # JSON Report
//!
//! A single document for the whole batch, see [`format_json_report`].
//!
//! # Architecture
//!
//! `format_*` functions are pure (return `Vec<String>` or `String`) for
//! testability; `print_*` wrappers write to stdout.

use crate::advice::{Advice, BilingualText, FocusVerdict};
use crate::batch::{BatchReport, ImageReport, SkippedImage};
use crate::metrics::QualityMetrics;
use serde::Serialize;

/// Width of the `=` rule closing each image block.
const SEPARATOR_WIDTH: usize = 50;

// ============================================================================
// Text report
// ============================================================================

/// ` - <pt> (Português) / <en> (English)`
fn bilingual_line(text: BilingualText) -> String {
    format!(
        " - {} (Português) / {} (English)",
        text.primary, text.secondary
    )
}

fn metrics_line(m: &QualityMetrics) -> String {
    format!(
        "Brilho: {:.2}, Contraste: {:.2}, Nitidez: {:.2}, Ruído: {:.2}",
        m.brightness, m.contrast, m.sharpness, m.noise
    )
}

/// Format the text block for one image, separator included.
pub fn format_image_report(report: &ImageReport) -> Vec<String> {
    let mut lines = vec![
        format!("Imagem: {}", report.file),
        metrics_line(&report.metrics),
        "Recomendações:".to_string(),
    ];
    lines.extend(
        report
            .assessment
            .recommendations
            .iter()
            .map(|advice| bilingual_line(advice.text())),
    );
    lines.push(bilingual_line(report.assessment.focus.text()));
    lines.push(String::new());
    lines.push("=".repeat(SEPARATOR_WIDTH));
    lines.push(String::new());
    lines
}

pub fn print_image_report(report: &ImageReport) {
    for line in format_image_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// JSON report
// ============================================================================

#[derive(Serialize)]
struct JsonText<K> {
    kind: K,
    #[serde(flatten)]
    text: BilingualText,
}

#[derive(Serialize)]
struct JsonImage<'a> {
    file: &'a str,
    metrics: &'a QualityMetrics,
    recommendations: Vec<JsonText<Advice>>,
    focus: JsonText<FocusVerdict>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    images: Vec<JsonImage<'a>>,
    skipped: &'a [SkippedImage],
}

/// Pretty-printed JSON for a whole batch:
///
/// ```json
/// {
///   "images": [{
///     "file": "gray.png",
///     "metrics": { "brightness": 128.0, "contrast": 0.0, "sharpness": 0.0, "noise": 0.0 },
///     "recommendations": [{ "kind": "increase_contrast", "pt": "...", "en": "..." }],
///     "focus": { "kind": "out_of_focus", "pt": "...", "en": "..." }
///   }],
///   "skipped": [{ "file": "broken.jpg", "reason": "..." }]
/// }
/// ```
pub fn format_json_report(report: &BatchReport) -> Result<String, serde_json::Error> {
    let images = report
        .images
        .iter()
        .map(|image| JsonImage {
            file: &image.file,
            metrics: &image.metrics,
            recommendations: image
                .assessment
                .recommendations
                .iter()
                .map(|&kind| JsonText {
                    kind,
                    text: kind.text(),
                })
                .collect(),
            focus: JsonText {
                kind: image.assessment.focus,
                text: image.assessment.focus.text(),
            },
        })
        .collect();

    serde_json::to_string_pretty(&JsonReport {
        images,
        skipped: &report.skipped,
    })
}

pub fn print_json_report(report: &BatchReport) -> Result<(), serde_json::Error> {
    println!("{}", format_json_report(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::{Assessment, Thresholds, assess};

    fn report(file: &str, metrics: QualityMetrics) -> ImageReport {
        ImageReport {
            file: file.to_string(),
            metrics,
            assessment: assess(&metrics, &Thresholds::STANDARD),
        }
    }

    fn uniform_gray() -> ImageReport {
        report(
            "gray.png",
            QualityMetrics {
                brightness: 128.0,
                contrast: 0.0,
                sharpness: 0.0,
                noise: 0.0,
            },
        )
    }

    // =========================================================================
    // Text report
    // =========================================================================

    #[test]
    fn text_block_for_uniform_gray() {
        let lines = format_image_report(&uniform_gray());
        let expected = vec![
            "Imagem: gray.png",
            "Brilho: 128.00, Contraste: 0.00, Nitidez: 0.00, Ruído: 0.00",
            "Recomendações:",
            " - Aumentar o contraste para melhorar a diferenciação de objetos. (Português) / Increase contrast to enhance object differentiation. (English)",
            " - Ajustar o foco ou aumentar a resolução para melhorar a nitidez. (Português) / Adjust focus or increase resolution to improve sharpness. (English)",
            " - Imagem pode estar fora de foco. Considere ajustar a lente ou posição da câmera. (Português) / Image may be out of focus. Consider adjusting the lens or camera position. (English)",
            "",
            "==================================================",
            "",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn metrics_rounded_to_two_decimals() {
        let line = metrics_line(&QualityMetrics {
            brightness: 101.257,
            contrast: 33.3333,
            sharpness: 1234.5,
            noise: 7.0,
        });
        assert_eq!(
            line,
            "Brilho: 101.26, Contraste: 33.33, Nitidez: 1234.50, Ruído: 7.00"
        );
    }

    #[test]
    fn ideal_image_has_single_advice_line_plus_focus() {
        let ideal = report(
            "ok.jpg",
            QualityMetrics {
                brightness: 120.0,
                contrast: 45.0,
                sharpness: 900.0,
                noise: 10.0,
            },
        );
        let lines = format_image_report(&ideal);
        let advice: Vec<&String> = lines.iter().filter(|l| l.starts_with(" - ")).collect();
        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("The image is within ideal quality parameters."));
        assert!(advice[1].contains("Image is in focus."));
    }

    #[test]
    fn separator_is_fifty_equals() {
        let lines = format_image_report(&uniform_gray());
        let rule = &lines[lines.len() - 2];
        assert_eq!(rule.len(), 50);
        assert!(rule.chars().all(|c| c == '='));
    }

    // =========================================================================
    // JSON report
    // =========================================================================

    #[test]
    fn json_report_shape() {
        let batch = BatchReport {
            images: vec![uniform_gray()],
            skipped: vec![SkippedImage {
                file: "broken.jpg".to_string(),
                reason: "bad header".to_string(),
            }],
        };

        let json: serde_json::Value =
            serde_json::from_str(&format_json_report(&batch).unwrap()).unwrap();

        let image = &json["images"][0];
        assert_eq!(image["file"], "gray.png");
        assert_eq!(image["metrics"]["brightness"], 128.0);
        assert_eq!(image["recommendations"][0]["kind"], "increase_contrast");
        assert_eq!(image["recommendations"][1]["kind"], "improve_sharpness");
        assert_eq!(
            image["recommendations"][1]["en"],
            "Adjust focus or increase resolution to improve sharpness."
        );
        assert_eq!(image["focus"]["kind"], "out_of_focus");
        assert_eq!(image["focus"]["pt"], FocusVerdict::OutOfFocus.text().primary);
        assert_eq!(json["skipped"][0]["file"], "broken.jpg");
        assert_eq!(json["skipped"][0]["reason"], "bad header");
    }

    #[test]
    fn json_report_empty_batch() {
        let json: serde_json::Value =
            serde_json::from_str(&format_json_report(&BatchReport::default()).unwrap()).unwrap();
        assert_eq!(json["images"].as_array().unwrap().len(), 0);
        assert_eq!(json["skipped"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn assessment_order_is_kept_in_json() {
        let mut image = uniform_gray();
        image.assessment = Assessment {
            recommendations: vec![Advice::ReduceNoise, Advice::IncreaseBrightness],
            focus: FocusVerdict::InFocus,
        };
        let batch = BatchReport {
            images: vec![image],
            skipped: vec![],
        };
        let json: serde_json::Value =
            serde_json::from_str(&format_json_report(&batch).unwrap()).unwrap();
        assert_eq!(json["images"][0]["recommendations"][0]["kind"], "reduce_noise");
        assert_eq!(json["images"][0]["recommendations"][1]["kind"], "increase_brightness");
    }
}
