use rand::TryRngCore;

/// Messages shown when a deck is finished. Index 0 doubles as the fallback.
pub const COMPLETION_MESSAGES: [&str; 7] = [
    "The Void retreats… for now 🕳️🐾",
    "Knowledge absorbed. The Void purrs in approval 😼",
    "You’ve conquered the deck. The Void whispers… ‘impressive.’ 🌌",
    "Session synced with the Void’s neural core 🧠✨",
    "The Void stares back, but you stand unshaken ⚫",
    "Memory integrated. The Void grows quieter… temporarily 🔮",
    "Another victory against the Void 🐈‍⬛",
];

const MAX_DRAWS: usize = 16;

/// Draw a completion message uniformly from the pool.
///
/// Any failure of the entropy source selects the first message.
pub fn pick_completion_message<R: TryRngCore + ?Sized>(rng: &mut R) -> &'static str {
    uniform_index(rng, COMPLETION_MESSAGES.len())
        .and_then(|i| COMPLETION_MESSAGES.get(i).copied())
        .unwrap_or(COMPLETION_MESSAGES[0])
}

/// Rejection-sample an index in `0..len` from raw `u32` draws.
fn uniform_index<R: TryRngCore + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    let bound = u32::try_from(len).ok().filter(|n| *n > 0)?;
    // 2^32 mod bound values at the top of the range would bias the modulo.
    let rejected = (u32::MAX % bound + 1) % bound;
    let limit = u32::MAX - rejected;

    for _ in 0..MAX_DRAWS {
        let value = rng.try_next_u32().ok()?;
        if value <= limit {
            return usize::try_from(value % bound).ok();
        }
    }
    None
}
