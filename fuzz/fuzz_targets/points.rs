#![no_main]
// Targets: P-192, P-224, P-256, P-384, P-521, secp256k1, brainpoolP256r1
use libfuzzer_sys::fuzz_target;
use weierstrass::{BigUint, Curve, Point, curve, sec1};

static mut I: u64 = 0;

fn test_group(p1: &Point<'_>, p2: &Point<'_>, s: &BigUint) {
    unsafe {
        I = I.wrapping_add(1);
        // Our goal is primarily to test deserialization, so we skip 6 of every 7 group tests
        if I % 7 != 0 {
            return;
        }
    }

    let curve = p1.curve();
    let sum = p1.add(p2).unwrap();
    let scalar_mul = p1.scalar_mul(s);

    // Test that addition and doubling are consistent
    assert!(p1.double() == p1.add(p1).unwrap());

    // Test that negation works correctly
    assert!(sum.add(&sum.negate()).unwrap().is_identity());

    // Test scalar multiplication distributive property
    assert!(scalar_mul.add(&scalar_mul).unwrap() == p1.scalar_mul(&(s + s)));

    // Test that the double-scalar product agrees with two single ones
    let expected = scalar_mul.add(&p2.scalar_mul(s)).unwrap();
    assert!(Point::lincomb(p1, s, p2, s).unwrap() == expected);

    // Test that the encodings round-trip
    for compress in [false, true] {
        let bytes = sec1::encode_point(&sum, compress);
        assert!(sec1::decode_point(&bytes, curve).unwrap() == sum);
    }
}

fn test_curve(curve: &Curve, data: &[u8]) {
    let len = curve.field_bytes_len();
    let g = curve.generator();

    let p1 = sec1::decode_point(&data[16..17 + len], curve).unwrap_or_else(|_| g.double());
    let p2 = sec1::decode_point(&data[32..33 + 2 * len], curve).unwrap_or_else(|_| g.clone());
    let scalar = BigUint::from_bytes_be(&data[64..64 + usize::from(data[5] & 0x3f)]);

    test_group(&p1, &p2, &scalar);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 180 {
        return;
    }

    for curve in [
        curve::p192(),
        curve::p224(),
        curve::p256(),
        curve::p384(),
        curve::p521(),
        curve::secp256k1(),
        curve::brainpool_p256r1(),
    ] {
        test_curve(curve, data);
    }
});
