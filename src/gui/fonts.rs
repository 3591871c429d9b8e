//! CJK fallback font discovery via fontconfig
//!
//! egui's bundled fonts have no Japanese glyphs, so a system CJK font is
//! appended as the last fallback of every family.

use anyhow::{Context, Result};
use eframe::egui;
use fontconfig::{Fontconfig, Pattern};
use std::ffi::CString;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tried in order; the first installed family wins
const CJK_FAMILIES: &[&str] = &[
    "Noto Sans CJK JP",
    "Noto Sans JP",
    "Source Han Sans JP",
    "IPAGothic",
    "TakaoGothic",
    "VL Gothic",
];

const FONT_KEY: &str = "cjk-fallback";

/// Resolve the file of the first installed CJK family
fn find_cjk_font() -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    for family in CJK_FAMILIES {
        let mut pattern = Pattern::new(&fc);
        let family_cstr = CString::new(*family)
            .with_context(|| format!("Invalid family name: {family}"))?;
        pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

        let matched = pattern.font_match();
        // fontconfig substitutes freely; only accept the family we asked for
        if matched
            .get_string(fontconfig::FC_FAMILY)
            .is_none_or(|found| !found.eq_ignore_ascii_case(family))
        {
            debug!(family, "CJK font family not installed");
            continue;
        }

        if let Some(file) = matched.filename() {
            let path = PathBuf::from(file);
            if path.exists() {
                debug!(family, path = %path.display(), "Found CJK font");
                return Ok(path);
            }
        }
    }

    anyhow::bail!("None of the CJK font families are installed: {}", CJK_FAMILIES.join(", "))
}

/// Append a system CJK font to egui's font fallbacks. Failure only means
/// Japanese text renders as boxes, so it is logged and otherwise ignored.
pub fn install_cjk_fallback(ctx: &egui::Context) {
    let loaded = find_cjk_font().and_then(|path| {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;
        Ok((path, bytes))
    });

    let (path, bytes) = match loaded {
        Ok(font) => font,
        Err(err) => {
            warn!(error = ?err, "No CJK font available, Japanese text may not render");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_KEY.to_string(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_KEY.to_string());
    }
    ctx.set_fonts(fonts);

    info!(path = %path.display(), "Installed CJK fallback font");
}
