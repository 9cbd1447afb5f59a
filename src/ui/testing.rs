//! Headless frame driver for component tests.

use eframe::egui::{
    self, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Ui,
};

/// Runs one frame of `contents` inside a central panel on a fixed screen.
pub fn frame(ctx: &egui::Context, events: Vec<Event>, contents: &mut dyn FnMut(&mut Ui)) -> FullOutput {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1024.0, 768.0))),
        events,
        ..Default::default()
    };
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| contents(ui));
    })
}

/// Every painted text with its screen rect, in paint order.
pub fn texts(output: &FullOutput) -> Vec<(String, Rect)> {
    fn collect(shape: &Shape, found: &mut Vec<(String, Rect)>) {
        match shape {
            Shape::Vec(shapes) => shapes.iter().for_each(|shape| collect(shape, found)),
            Shape::Text(text) => found.push((
                text.galley.text().to_string(),
                text.galley.rect.translate(text.pos.to_vec2()),
            )),
            _ => {}
        }
    }

    let mut found = Vec::new();
    for clipped in &output.shapes {
        collect(&clipped.shape, &mut found);
    }
    found
}

/// Rects of every painted text containing `needle`.
pub fn text_rects(output: &FullOutput, needle: &str) -> Vec<Rect> {
    texts(output)
        .into_iter()
        .filter(|(text, _)| text.contains(needle))
        .map(|(_, rect)| rect)
        .collect()
}

/// Presses and releases the primary button at `pos` over two frames.
/// `pos` should come from an earlier frame of the same layout.
pub fn click(ctx: &egui::Context, pos: Pos2, contents: &mut dyn FnMut(&mut Ui)) {
    let button = |pressed| Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    };
    frame(ctx, vec![Event::PointerMoved(pos), button(true)], contents);
    frame(ctx, vec![button(false)], contents);
}
