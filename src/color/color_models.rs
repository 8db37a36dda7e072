/// Conversions HSB -> RGB utilisées par la colorisation.

/// Canal alpha opaque d'un pixel ARGB empaqueté.
pub const OPAQUE: u32 = 0xff00_0000;

/// Espace colorimétrique HSB/HSV (Teinte, Saturation, Brillance/Valeur)
#[derive(Clone, Copy, Debug)]
pub struct Hsb {
    pub h: f64, // Teinte [0, 360]
    pub s: f64, // Saturation [0, 1]
    pub b: f64, // Brillance/Valeur [0, 1]
}

/// Convertit HSB/HSV vers RGB (entrées normalisées)
pub fn hsb_to_rgb(hsb: Hsb) -> (u8, u8, u8) {
    let h = hsb.h;
    let s = hsb.s;
    let v = hsb.b;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0).clamp(0.0, 255.0) as u8,
        ((g + m) * 255.0).clamp(0.0, 255.0) as u8,
        ((b + m) * 255.0).clamp(0.0, 255.0) as u8,
    )
}

/// Empaquette un triplet RGB en ARGB opaque.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Conversion HSB -> ARGB empaqueté, calculée en flottants 32 bits.
///
/// La teinte est prise modulo 1 puis découpée en six secteurs ; chaque canal
/// vaut `(int)(x * 255 + 0.5)`. Les entrées ne sont PAS bornées : avec une
/// saturation > 1 ou une brillance > 1 les canaux débordent de leur octet et
/// se superposent aux voisins lors de l'empaquetage (arithmétique 32 bits
/// modulaire). C'est ce comportement qui donne l'image de référence.
pub fn hsb_to_argb(hue: f32, saturation: f32, brightness: f32) -> u32 {
    let (r, g, b) = if saturation == 0.0 {
        let v = channel(brightness);
        (v, v, v)
    } else {
        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        match h as i32 {
            0 => (channel(brightness), channel(t), channel(p)),
            1 => (channel(q), channel(brightness), channel(p)),
            2 => (channel(p), channel(brightness), channel(t)),
            3 => (channel(p), channel(q), channel(brightness)),
            4 => (channel(t), channel(p), channel(brightness)),
            5 => (channel(brightness), channel(p), channel(q)),
            _ => (0, 0, 0),
        }
    };

    let packed = (OPAQUE as i32) | r.wrapping_shl(16) | g.wrapping_shl(8) | b;
    packed as u32
}

// `as i32` tronque vers zéro (et sature hors bornes)
fn channel(x: f32) -> i32 {
    (x * 255.0 + 0.5) as i32
}
