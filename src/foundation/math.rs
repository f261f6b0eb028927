use crate::foundation::color::Rgb8;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Source-over composite of premultiplied RGBA8 `src` onto premultiplied RGBA8 `dst`.
pub(crate) fn over_premul_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        if inv == 255 {
            continue;
        }
        for (dc, &sc) in d.iter_mut().zip(s) {
            let v = u16::from(sc) + mul_div255_u16(u16::from(*dc), inv);
            *dc = v.min(255) as u8;
        }
    }
}

/// Convert straight RGBA8 to premultiplied alpha.
pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

/// Convert premultiplied RGBA8 to straight alpha.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

/// Flatten premultiplied RGBA8 over an opaque background into packed RGB8.
pub(crate) fn flatten_premul_to_rgb8(rgba: &[u8], bg: Rgb8) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
    let bg = [bg.r, bg.g, bg.b];
    for px in rgba.chunks_exact(4) {
        let inv = 255 - u16::from(px[3]);
        for (&c, &b) in px.iter().zip(&bg) {
            let v = u16::from(c) + mul_div255_u16(u16::from(b), inv);
            out.push(v.min(255) as u8);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
