use super::*;

#[test]
fn fnv_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"penumbra");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'p');
    b.write_bytes(b"enumbra");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn hash01_is_deterministic_and_in_range() {
    for (x, y) in [(0u32, 0u32), (1, 0), (0, 1), (123, 456), (u32::MAX, 7)] {
        let v = hash01(x, y);
        assert_eq!(v, hash01(x, y));
        assert!((0.0..1.0).contains(&v), "hash01({x}, {y}) = {v}");
    }
}

#[test]
fn hash01_varies_with_position() {
    // Neighbors must not all collide, or the sample rotation would band.
    let base = hash01(10, 10);
    assert!(hash01(11, 10) != base || hash01(10, 11) != base);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp_f32(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp_f32(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp_f32(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn mul_div255_identities() {
    for v in [0u16, 1, 127, 254, 255] {
        assert_eq!(mul_div255(v, 255), v as u8);
        assert_eq!(mul_div255(v, 0), 0);
        assert_eq!(mul_div255(255, v), v as u8);
    }
}
