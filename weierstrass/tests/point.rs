//! Group law and scalar multiplication tests.

use hex_literal::hex;
use proptest::prelude::*;
use weierstrass::{BigUint, Curve, Error, Point, curve};

fn int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn point<'c>(x: &[u8], y: &[u8], curve: &'c Curve) -> Point<'c> {
    Point::new(int(x), int(y), curve).unwrap()
}

/// Point multiplication vectors from NIST's "Routines for NIST Curves".
mod nist_routines {
    use super::*;

    #[test]
    fn p192() {
        let curve = curve::p192();
        let s = point(
            &hex!("d458e7d127ae671b0c330266d246769353a012073e97acf8"),
            &hex!("325930500d851f336bddc050cf7fb11b5673a1645086df3b"),
            curve,
        );
        let d = int(&hex!("a78a236d60baec0c5dd41b33a542463a8255391af64c74ee"));
        let expected = point(
            &hex!("1faee4205a4f669d2d0a8f25e3bcec9a62a6952965bf6d31"),
            &hex!("5ff2cdfa508a2581892367087c696f179e7a4d7e8260fb06"),
            curve,
        );
        assert_eq!(s.scalar_mul(&d), expected);
    }

    #[test]
    fn p224() {
        let curve = curve::p224();
        let s = point(
            &hex!("6eca814ba59a930843dc814edd6c97da95518df3c6fdf16e9a10bb5b"),
            &hex!("ef4b497f0963bc8b6aec0ca0f259b89cd80994147e05dc6b64d7bf22"),
            curve,
        );
        let d = int(&hex!("a78ccc30eaca0fcc8e36b2dd6fbb03df06d37f52711e6363aaf1d73b"));
        let expected = point(
            &hex!("96a7625e92a8d72bff1113abdb95777e736a14c6fdaacc392702bca4"),
            &hex!("0f8e5702942a3c5e13cd2fd5801915258b43dfadc70d15dbada3ed10"),
            curve,
        );
        assert_eq!(s.scalar_mul(&d), expected);
    }

    #[test]
    fn p256() {
        let curve = curve::p256();
        let s = point(
            &hex!("de2444bebc8d36e682edd27e0f271508617519b3221a8fa0b77cab3989da97c9"),
            &hex!("c093ae7ff36e5380fc01a5aad1e66659702de80f53cec576b6350b243042a256"),
            curve,
        );
        let d = int(&hex!(
            "c51e4753afdec1e6b6c6a5b992f43f8dd0c7a8933072708b6522468b2ffb06fd"
        ));
        let expected = point(
            &hex!("51d08d5f2d4278882946d88d83c97d11e62becc3cfc18bedacc89ba34eeca03f"),
            &hex!("75ee68eb8bf626aa5b673ab51f6e744e06f8fcf8a6c0cf3035beca956a7b41d5"),
            curve,
        );
        assert_eq!(s.scalar_mul(&d), expected);
    }

    #[test]
    fn p384() {
        let curve = curve::p384();
        let s = point(
            &hex!(
                "fba203b81bbd23f2b3be971cc23997e1ae4d89e69cb6f92385dda82768ada415"
                "ebab4167459da98e62b1332d1e73cb0e"
            ),
            &hex!(
                "5ffedbaefdeba603e7923e06cdb5d0c65b22301429293376d5c6944e3fa6259f"
                "162b4788de6987fd59aed5e4b5285e45"
            ),
            curve,
        );
        let d = int(&hex!(
            "a4ebcae5a665983493ab3e626085a24c104311a761b5a8fdac052ed1f111a5c4"
            "4f76f45659d2d111a61b5fdd97583480"
        ));
        let expected = point(
            &hex!(
                "e4f77e7ffeb7f0958910e3a680d677a477191df166160ff7ef6bb5261f791aa7"
                "b45e3e653d151b95dad3d93ca0290ef2"
            ),
            &hex!(
                "ac7dee41d8c5f4a7d5836960a773cfc1376289d3373f8cf7417b0c6207ac32e9"
                "13856612fc9ff2e357eb2ee05cf9667f"
            ),
            curve,
        );
        assert_eq!(s.scalar_mul(&d), expected);
    }

    #[test]
    fn p521() {
        let curve = curve::p521();
        let s = point(
            &hex!(
                "01d5c693f66c08ed03ad0f031f937443458f601fd098d3d0227b4bf62873af50"
                "740b0bb84aa157fc847bcf8dc16a8b2b8bfd8e2d0a7d39af04b089930ef6dad5"
                "c1b4"
            ),
            &hex!(
                "0144b7770963c63a39248865ff36b074151eac33549b224af5c8664c54012b81"
                "8ed037b2b7c1a63ac89ebaa11e07db89fcee5b556e49764ee3fa66ea7ae61ac0"
                "1823"
            ),
            curve,
        );
        let d = int(&hex!(
            "01eb7f81785c9629f136a7e8f8c674957109735554111a2a866fa5a166699419"
            "bfa9936c78b62653964df0d6da940a695c7294d41b2d6600de6dfcf0edcfc89f"
            "dcb1"
        ));
        let expected = point(
            &hex!(
                "0091b15d09d0ca0353f8f96b93cdb13497b0a4bb582ae9ebefa35eee61bf7b7d"
                "041b8ec34c6c00c0c0671c4ae063318fb75be87af4fe859608c95f0ab4774f8c"
                "95bb"
            ),
            &hex!(
                "0130f8f8b5e1abb4dd94f6baaf654a2d5810411e77b7423965e0c7fd79ec1ae5"
                "63c207bd255ee9828eb7a03fed565240d2cc80ddd2cecbb2eb50f0951f75ad87"
                "977f"
            ),
            curve,
        );
        assert_eq!(s.scalar_mul(&d), expected);
    }
}

/// `m·G` on secp256k1.
#[test]
fn secp256k1_generator_multiples() {
    const VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
        (
            hex!("AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522"),
            hex!("34F9460F0E4F08393D192B3C5133A6BA099AA0AD9FD54EBCCFACDFA239FF49C6"),
            hex!("0B71EA9BD730FD8923F6D25A7A91E7DD7728A960686CB5A901BB419E0F2CA232"),
        ),
        (
            hex!("7E2B897B8CEBC6361663AD410835639826D590F393D90A9538881735256DFAE3"),
            hex!("D74BF844B0862475103D96A611CF2D898447E288D34B360BC885CB8CE7C00575"),
            hex!("131C670D414C4546B88AC3FF664611B1C38CEB1C21D76369D7A7A0969D61D97D"),
        ),
        (
            hex!("6461E6DF0FE7DFD05329F41BF771B86578143D4DD1F7866FB4CA7E97C5FA945D"),
            hex!("E8AECC370AEDD953483719A116711963CE201AC3EB21D3F3257BB48668C6A72F"),
            hex!("C25CAF2F0EBA1DDB2F0F3F47866299EF907867B7D27E95B3873BF98397B24EE1"),
        ),
        (
            hex!("376A3A2CDCD12581EFFF13EE4AD44C4044B8A0524C42422A7E1E181E4DEECCEC"),
            hex!("14890E61FCD4B0BD92E5B36C81372CA6FED471EF3AA60A3E415EE4FE987DABA1"),
            hex!("297B858D9F752AB42D3BCA67EE0EB6DCD1C2B7B0DBE23397E66ADC272263F982"),
        ),
        (
            hex!("1B22644A7BE026548810C378D0B2994EEFA6D2B9881803CB02CEFF865287D1B9"),
            hex!("F73C65EAD01C5126F28F442D087689BFA08E12763E0CEC1D35B01751FD735ED3"),
            hex!("F449A8376906482A84ED01479BD18882B919C140D638307F0C0934BA12590BDE"),
        ),
    ];

    let curve = curve::secp256k1();
    for (m, x, y) in VECTORS {
        assert_eq!(curve.generator().scalar_mul(&int(m)), point(x, y, curve));
    }
}

#[test]
fn small_multiples_of_generator() {
    let curve = curve::p256();
    let g = curve.generator();
    let mut acc = Point::identity(curve);

    for k in 0u32..20 {
        assert_eq!(g.scalar_mul(&BigUint::from(k)), acc, "k = {k}");
        acc = acc.add(&g).unwrap();
    }
}

#[test]
fn order_multiple_is_identity() {
    for name in [
        "P192",
        "P224",
        "P256",
        "P384",
        "P521",
        "secp256k1",
        "brainpoolP224r1",
        "brainpoolP256r1",
        "brainpoolP320r1",
        "brainpoolP384r1",
        "brainpoolP512r1",
    ] {
        let curve = curve::by_name(name).unwrap();
        let g = curve.generator();
        assert!(g.scalar_mul(curve.q()).is_identity(), "{name}");

        let q_minus_one = curve.q() - 1u32;
        assert_eq!(g.scalar_mul(&q_minus_one), g.negate(), "{name}");
    }
}

#[test]
fn scalar_is_reduced_mod_order() {
    let curve = curve::secp256k1();
    let g = curve.generator();
    let k = BigUint::from(12345u32);
    assert_eq!(g.scalar_mul(&(curve.q() + &k)), g.scalar_mul(&k));
    assert_eq!(g.scalar_mul(&(curve.q() * 3u32 + &k)), g.scalar_mul(&k));
}

#[test]
fn identity_handling() {
    let curve = curve::p224();
    let g = curve.generator();
    let o = Point::identity(curve);

    assert_eq!(g.add(&o).unwrap(), g);
    assert_eq!(o.add(&g).unwrap(), g);
    assert_eq!(o.add(&o).unwrap(), o);
    assert_eq!(o.double(), o);
    assert_eq!(o.negate(), o);
    assert!(g.sub(&g).unwrap().is_identity());
    assert!(g.add(&g.negate()).unwrap().is_identity());
    assert!(o.scalar_mul(&BigUint::from(7u32)).is_identity());
}

#[test]
fn points_from_different_curves_do_not_mix() {
    let g256 = curve::p256().generator();
    let g384 = curve::p384().generator();

    assert_eq!(g256.add(&g384), Err(Error::CurveMismatch));
    assert_eq!(g256.sub(&g384), Err(Error::CurveMismatch));
    assert_eq!(
        Point::lincomb(&g256, &BigUint::from(1u32), &g384, &BigUint::from(1u32)),
        Err(Error::CurveMismatch)
    );
    assert_ne!(g256, g384);
}

#[test]
fn custom_curve_with_two_torsion() {
    // y² = x³ + 2x + 3 over F_97 has 100 points; G generates the subgroup of
    // order 5.
    let toy = Curve::new(
        "toy",
        BigUint::from(97u32),
        BigUint::from(2u32),
        BigUint::from(3u32),
        BigUint::from(5u32),
        BigUint::from(3u32),
        BigUint::from(6u32),
    )
    .unwrap();

    let a = Point::new(BigUint::from(30u32), BigUint::from(0u32), &toy).unwrap();
    let b = Point::new(BigUint::from(68u32), BigUint::from(0u32), &toy).unwrap();
    let sum = a.add(&b).unwrap();
    assert_eq!(sum, Point::new(BigUint::from(96u32), BigUint::from(0u32), &toy).unwrap());
    assert!(a.double().is_identity());

    let g = toy.generator();
    assert!(g.scalar_mul(&BigUint::from(5u32)).is_identity());
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes) % curve::secp256k1().q()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn add_is_commutative(a in scalar(), b in scalar()) {
        let g = curve::secp256k1().generator();
        let p = g.scalar_mul(&a);
        let q = g.scalar_mul(&b);
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn scalar_mul_distributes(a in scalar(), b in scalar()) {
        let curve = curve::secp256k1();
        let g = curve.generator();
        let sum = (&a + &b) % curve.q();
        prop_assert_eq!(g.scalar_mul(&a).add(&g.scalar_mul(&b)).unwrap(), g.scalar_mul(&sum));
    }

    #[test]
    fn negation_cancels(k in scalar()) {
        let curve = curve::secp256k1();
        let g = curve.generator();
        let p = g.scalar_mul(&k);
        let rest = g.scalar_mul(&((curve.q() - &k) % curve.q()));
        prop_assert!(p.add(&rest).unwrap().is_identity());
        prop_assert_eq!(p.negate(), rest);
    }

    #[test]
    fn double_matches_add(k in scalar()) {
        let p = curve::secp256k1().generator().scalar_mul(&k);
        prop_assert_eq!(p.double(), p.add(&p).unwrap());
    }

    #[test]
    fn lincomb_matches_separate_products(a in scalar(), b in scalar(), c in scalar()) {
        let g = curve::secp256k1().generator();
        let q = g.scalar_mul(&c);
        let expected = g.scalar_mul(&a).add(&q.scalar_mul(&b)).unwrap();
        prop_assert_eq!(Point::lincomb(&g, &a, &q, &b).unwrap(), expected);
    }
}
