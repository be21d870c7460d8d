#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("petalfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "petalfolio",
        options,
        Box::new(|cc| Ok(Box::new(petalfolio_ui::PortfolioApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start petalfolio: {e}"))
}

// The web build enters through the wasm-bindgen start fn in lib.rs.
#[cfg(target_arch = "wasm32")]
fn main() {}
