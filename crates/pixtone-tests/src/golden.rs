//! Golden hash tests for whole-image output.
//!
//! Each case renders the 64x48 [`gradient_image`] through the engine and
//! compares the SHA-256 of the resulting RGBA bytes against a reference
//! computed independently in double precision with round-half-to-even
//! quantization. Any change to the pipeline math shows up here as a hash
//! mismatch.
//!
//! ```bash
//! cargo test --package pixtone-tests golden
//! ```

use sha2::{Digest, Sha256};

use pixtone_ops::adjust::{self, Adjustments};
use pixtone_ops::parallel;

use crate::gradient_image;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 48;

struct GoldenCase {
    name: &'static str,
    adj: Adjustments,
    sha256: &'static str,
}

const CASES: &[GoldenCase] = &[
    GoldenCase {
        name: "identity",
        adj: Adjustments::new(0, 100, 0),
        sha256: "e809b6f177d378fc4fa29cb5d0730941ecce980f1dabdfe9589f1d34a37cb310",
    },
    GoldenCase {
        name: "hue_90",
        adj: Adjustments::new(90, 100, 0),
        sha256: "8e696bce2a78dd69747d37c3248492f851b88f1592edadbb087c3baf2abdbbd1",
    },
    GoldenCase {
        name: "hue_neg_135",
        adj: Adjustments::new(-135, 100, 0),
        sha256: "994a06eed9159ea3901e2b2acd6fac48ba6398e578ce1591c442110e6b707ddb",
    },
    GoldenCase {
        name: "contrast_150",
        adj: Adjustments::new(0, 150, 0),
        sha256: "23e7ec6579bb773bceee6dca7ce9d52f45b3c2e2a584a08681a9d26944b8e8a2",
    },
    GoldenCase {
        name: "contrast_40",
        adj: Adjustments::new(0, 40, 0),
        sha256: "cd4b6d62e064cdad837dac8a1fb1231a2e3d4c7dbae6e92f61228daf097f1852",
    },
    GoldenCase {
        name: "exposure_plus_35",
        adj: Adjustments::new(0, 100, 35),
        sha256: "616f54a7042f1c65d2efb92d42aa1ad7ac2790eb75a409992f7a26b65519bca5",
    },
    GoldenCase {
        name: "combined",
        adj: Adjustments::new(90, 150, 20),
        sha256: "fbd20b71a45778d2eb8e307d93d050c46fafc7b9bc4043054eee683713ec6b38",
    },
    GoldenCase {
        name: "combined_cool",
        adj: Adjustments::new(-50, 120, -15),
        sha256: "5a91d8a20623cc16669199061d915bb156d8c611b6d0bb257520e4d966de4cae",
    },
];

fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

#[test]
fn golden_sequential() {
    crate::init_tracing();
    let src = gradient_image(WIDTH, HEIGHT);
    for case in CASES {
        let mut data = src.data().to_vec();
        adjust::apply_inplace(&mut data, WIDTH, HEIGHT, &case.adj).unwrap();
        assert_eq!(sha256_hex(&data), case.sha256, "golden mismatch: {}", case.name);
    }
}

#[test]
fn golden_parallel() {
    let src = gradient_image(WIDTH, HEIGHT);
    for case in CASES {
        let out = parallel::apply(&src, &case.adj);
        assert_eq!(sha256_hex(out.data()), case.sha256, "golden mismatch: {}", case.name);
    }
}

#[test]
fn golden_identity_is_input() {
    let src = gradient_image(WIDTH, HEIGHT);
    assert_eq!(sha256_hex(src.data()), CASES[0].sha256);
}
