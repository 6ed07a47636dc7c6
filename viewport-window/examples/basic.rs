// Example: minimal usage, one render per scroll event.
use viewport_window::{Align, ViewportWindow, WindowOptions};

fn main() -> viewport_window::Result<()> {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();
    let mut window = ViewportWindow::new(WindowOptions::new(20, 400))?;

    for offset in [0u64, 12_345, 19_999_600, 50_000_000] {
        window.on_scroll(offset);
        let out = window.render(&rows)?;
        println!(
            "offset={offset} range={:?} rendered={} total_height={} offset_y={}",
            out.range,
            out.visible_items.len(),
            out.total_height,
            out.offset_y
        );
    }

    let off = window.scroll_to_index(500_000, Align::Center, rows.len())?;
    println!("after scroll_to_index: offset={off}");
    if let Some(first) = window.render(&rows)?.positioned().next() {
        println!("first rendered: #{} at y={} {:?}", first.index, first.top, first.item);
    }
    Ok(())
}
