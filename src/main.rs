use wireview::colors;
use wireview::prelude::*;

fn main() -> Result<(), String> {
    let mut window = Window::new("wireview", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut framebuffer = Framebuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let viewport = Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut state = ViewState::new();
    let mut limiter = FrameLimiter::new(&window);

    loop {
        let input = window.poll_input();
        if input.quit {
            break;
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        state.apply(&input);
        state.advance(delta_ms as f32 / 1000.0);

        framebuffer.clear(colors::BACKGROUND);
        render_model(state.model().data(), &state, &viewport, &mut framebuffer);
        draw_help_overlay(&mut framebuffer);

        window.present(framebuffer.as_bytes())?;
    }

    Ok(())
}
