use viewport_window::WindowOptions;
use viewport_window_adapter::Controller;

fn main() -> viewport_window::Result<()> {
    // Example: preserve visual scroll position across "prepend" (chat/timeline load older messages).
    //
    // The adapter flow is typically:
    // 1) capture an anchor (index + scroll delta) before data changes
    // 2) apply data changes
    // 3) apply the anchor with an old -> new index mapping
    let mut messages: Vec<String> = (0..100).map(|i| format!("message {i}")).collect();
    let mut c = Controller::new(WindowOptions::new(24, 240))?;
    c.on_scroll(1_210, 0);

    let Some(anchor) = c.capture_first_visible_anchor(messages.len())? else {
        return Ok(());
    };
    println!(
        "before prepend: off={} anchor={anchor:?}",
        c.window().scroll_offset()
    );

    // Load 10 older messages above.
    let older: Vec<String> = (0..10).map(|i| format!("older {i}")).collect();
    messages.splice(0..0, older);

    let ok = c.apply_anchor(&anchor, messages.len(), |i| Some(i + 10))?;
    let out = c.render(&messages)?;
    println!(
        "after prepend: ok={ok} off={} first={:?}",
        c.window().scroll_offset(),
        out.visible_items.first()
    );
    Ok(())
}
