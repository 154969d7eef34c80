//! Per-event color variants
//!
//! Every event of a kind shares the kind's base color, shaded a little
//! toward white or black so neighbouring bands stay distinguishable. The
//! shade is a pure function of the event id.

use folio_domain::{EventId, EventKind};

const MAX_SHADE: f64 = 0.18;
const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-16 code units of a string
pub fn hash_str(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Parse `#rrggbb` (leading `#` optional)
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a color as lowercase `#rrggbb`
pub fn rgb_to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Linear mix of two colors, `t` in `[0, 1]`
pub fn mix(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Deterministic shade of `base` for one event
///
/// Unparseable base colors come back unchanged.
///
/// # Examples
///
/// ```
/// use folio_timeline::style::variant_color;
///
/// let a = variant_color("#38bdf8", "exp-0");
/// assert_eq!(a, variant_color("#38bdf8", "exp-0"));
/// assert_eq!(variant_color("teal", "exp-0"), "teal");
/// ```
pub fn variant_color(base: &str, event_id: &str) -> String {
    let Some(rgb) = hex_to_rgb(base) else {
        return base.to_string();
    };
    let fraction = f64::from(hash_str(event_id) % 1000) / 999.0;
    let signed = (fraction - 0.5) * 2.0;
    let amount = signed.abs() * MAX_SHADE;
    let target = if signed >= 0.0 {
        (255, 255, 255)
    } else {
        (0, 0, 0)
    };
    rgb_to_hex(mix(rgb, target, amount))
}

/// Shaded color of an event from its kind's base color
pub fn event_color(kind: EventKind, id: &EventId) -> String {
    variant_color(kind.base_color(), id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_values() {
        assert_eq!(hash_str(""), 0x811c_9dc5);
        assert_eq!(hash_str("a"), 0xe40c_292c);
        assert_eq!(hash_str("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgb("#38bdf8"), Some((0x38, 0xbd, 0xf8)));
        assert_eq!(hex_to_rgb("FFFFFF"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        assert_eq!(rgb_to_hex((0x38, 0xbd, 0xf8)), "#38bdf8");
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix((10, 20, 30), (255, 255, 255), 0.0), (10, 20, 30));
        assert_eq!(mix((10, 20, 30), (0, 0, 0), 1.0), (0, 0, 0));
        assert_eq!(mix((0, 0, 0), (255, 255, 255), 0.5), (128, 128, 128));
    }

    #[test]
    fn test_variant_stays_within_shade_bound() {
        let base = (0x38, 0xbd, 0xf8);
        for i in 0..50 {
            let id = format!("prj-{}", i);
            let shaded = hex_to_rgb(&variant_color("#38bdf8", &id)).unwrap();
            for (orig, got) in [(base.0, shaded.0), (base.1, shaded.1), (base.2, shaded.2)] {
                let max_move = (f64::from(orig.max(255 - orig)) * MAX_SHADE).ceil() as i32;
                assert!((i32::from(orig) - i32::from(got)).abs() <= max_move);
            }
        }
    }

    #[test]
    fn test_event_color_uses_kind_base() {
        let id = EventId::new(EventKind::Course, 3);
        assert_eq!(
            event_color(EventKind::Course, &id),
            variant_color("#a78bfa", "crs-3")
        );
    }
}
