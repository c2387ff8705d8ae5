// Trunk entrypoint. On native targets this binary does nothing; the real
// app only exists behind `--features web` on `wasm32`.

fn main() {
    // No-op on native targets.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    captura_web::start();
}
