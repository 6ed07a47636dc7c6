use viewport_window::{ViewportWindow, WindowOptions};
use viewport_window_adapter::ScrollHandle;

/// Stand-in for a toolkit's scroll container that owns its event callbacks.
struct FakeScrollContainer {
    listeners: Vec<Box<dyn FnMut(u64)>>,
}

impl FakeScrollContainer {
    fn emit(&mut self, offset: u64) {
        for l in &mut self.listeners {
            l(offset);
        }
    }
}

fn main() -> viewport_window::Result<()> {
    let rows: Vec<String> = (0..50_000).map(|i| format!("row {i}")).collect();
    let handle = ScrollHandle::new(ViewportWindow::new(WindowOptions::new(18, 540))?);

    let mut container = FakeScrollContainer {
        listeners: vec![Box::new(handle.handler())],
    };

    for offset in [0u64, 900, 90_000, 5_000_000] {
        container.emit(offset);
        let out = handle.render(&rows)?;
        println!(
            "offset={offset} range={:?} total_height={} offset_y={} bottom_padding={}",
            out.range,
            out.total_height,
            out.offset_y,
            out.bottom_padding()
        );
    }
    Ok(())
}
