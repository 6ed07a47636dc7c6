// Example: a simulated event loop feeding scroll events and decaying `is_scrolling`.
use viewport_window::{ViewportWindow, WindowOptions};

fn main() -> viewport_window::Result<()> {
    let items: Vec<u32> = (0..10_000).collect();
    let options = WindowOptions::new(16, 480)
        .with_overscan(3)
        .with_is_scrolling_reset_delay_ms(120)
        .with_on_change(Some(|w: &ViewportWindow, is_scrolling: bool| {
            println!(
                "  on_change: offset={} scrolling={is_scrolling} dir={:?}",
                w.scroll_offset(),
                w.scroll_direction()
            );
        }));
    let mut window = ViewportWindow::new(options)?;

    // Simulate a 60fps wheel gesture followed by idle frames.
    let mut now_ms = 0u64;
    for frame in 0..20u64 {
        now_ms += 16;
        if frame < 8 {
            window.on_scroll_at(frame * 200, now_ms);
        } else {
            window.update_scrolling(now_ms);
        }
        let out = window.render(&items)?;
        println!(
            "frame={frame} range={:?} offset_y={}",
            out.range, out.offset_y
        );
    }
    Ok(())
}
