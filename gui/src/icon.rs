use eframe::egui::{Color32, IconData};

const ICON_SIZE: u32 = 32;
const ICON_BLOCK: u32 = ICON_SIZE / 2;

/// Two live cells on a diagonal.
pub fn icon(background: Color32, cell: Color32) -> IconData {
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let alive = (x < ICON_BLOCK) == (y < ICON_BLOCK);
            let color = if alive { cell } else { background };
            rgba.extend_from_slice(&color.to_array());
        }
    }
    IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}
