//! Random secret generation.

use crate::core::{Code, Color, GameRng, CODE_LENGTH, COLOR_COUNT};

/// Draw a secret: four independent uniform picks from the six colors,
/// with replacement.
#[must_use]
pub fn generate_secret(rng: &mut GameRng) -> Code {
    let mut pegs = [Color::Blue; CODE_LENGTH];
    for peg in &mut pegs {
        *peg = Color::ALL[rng.gen_range_usize(0..COLOR_COUNT)];
    }
    Code::new(pegs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_secret() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(generate_secret(&mut rng1), generate_secret(&mut rng2));
        }
    }

    #[test]
    fn test_secrets_vary() {
        let mut rng = GameRng::new(3);
        let first = generate_secret(&mut rng);
        assert!((0..50).any(|_| generate_secret(&mut rng) != first));
    }

    #[test]
    fn test_every_color_reaches_every_slot() {
        let mut rng = GameRng::new(9);
        let mut seen = [[false; COLOR_COUNT]; CODE_LENGTH];

        for _ in 0..500 {
            for (slot, color) in generate_secret(&mut rng).iter().enumerate() {
                seen[slot][color.tag() as usize] = true;
            }
        }

        assert!(seen.iter().flatten().all(|&s| s));
    }
}
