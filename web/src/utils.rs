use slotgate_core as game;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Inline style for one confetti particle. The fall itself is the
/// `confetti-fall` keyframes from the page stylesheet, which reads the
/// particle's rotation from `--confetti-rotate`.
pub(crate) fn particle_style(particle: &game::Particle) -> String {
    format!(
        "position:absolute;left:{:.1}%;top:-10px;font-size:{:.1}px;opacity:0.95;\
         pointer-events:none;transform:rotate({:.0}deg);--confetti-rotate:{:.0}deg;\
         animation:confetti-fall {}ms cubic-bezier(.2,.9,.3,1) forwards",
        particle.left_pct,
        particle.font_px,
        particle.rotation_deg,
        particle.rotation_deg,
        particle.duration_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_style_carries_position_and_timing() {
        let particle = game::Particle {
            left_pct: 42.25,
            font_px: 12.0,
            glyph: "🎉",
            rotation_deg: 90.0,
            duration_ms: 1500,
        };
        let style = particle_style(&particle);

        assert!(style.contains("left:42.2%") || style.contains("left:42.3%"));
        assert!(style.contains("font-size:12.0px"));
        assert!(style.contains("transform:rotate(90deg)"));
        assert!(style.contains("animation:confetti-fall 1500ms"));
    }
}
