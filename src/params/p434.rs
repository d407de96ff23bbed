//! SIKEp434: p = 2^216 * 3^137 - 1

use super::{BasePointHex, ParamConstants};

const STRATEGY_A: [usize; 107] = [
    48, 27, 15, 8, 4, 2, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1,
    1, 2, 1, 1, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1,
    1, 1, 12, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1,
    1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4,
    2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2,
    1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1,
];

const STRATEGY_B: [usize; 136] = [
    54, 33, 20, 12, 7, 4, 3, 2, 1, 1, 1, 1, 2, 1, 1, 3,
    2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1,
    8, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1,
    1, 1, 1, 13, 8, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1,
    3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2,
    1, 1, 1, 21, 13, 8, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1,
    1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1,
    2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1,
    1, 3, 2, 1, 1, 1, 1, 1,
];

const POW_STRATEGY: [u8; 80] = [
    3, 10, 7, 5, 6, 5, 3, 8, 4, 7, 5, 6, 4, 5, 9, 6,
    3, 11, 5, 5, 2, 8, 4, 7, 7, 8, 5, 6, 4, 8, 5, 2,
    10, 6, 5, 4, 8, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1,
];

const MUL_STRATEGY: [u8; 80] = [
    2, 15, 9, 8, 14, 12, 2, 8, 5, 15, 8, 15, 6, 6, 3, 2,
    0, 10, 9, 13, 1, 12, 3, 7, 1, 10, 8, 11, 2, 15, 14, 1,
    11, 12, 14, 3, 11, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
];

pub(super) const CONSTANTS: ParamConstants = ParamConstants {
    name: "SIKEp434",
    prime: "2341f271773446cfc5fd681c520567bc65c783158aea3fdc1767ae2ffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    e_a: 216,
    e_b: 137,
    msg_bytes: 16,
    crypto_bytes: 16,
    pa: BasePointHex {
        x0: "3ccfc5e1f050030363e6920a0f7a4c6c71e63de63a0e6475af621995705f7c84500cb2bb61e950e19eab8661d25c4a50ed279646cb48",
        x1: "1ad1c1cae7840edda6d8a924520f60e573d3b9dfac6d189941cb22326d284a8816cc4249410fe80d68047d823c97d705246f869e3ea50",
        y0: "8918bb92deaeea18696ff97ff4c425df3276b512fd5b26a79cd4a62484190b737ed1cc497e9e2a54c5f5c96f90fb59596a8190b04d1f",
        y1: "136973098cdcd9e646070c225d0dff3019525546eb5e6d28ac91402bdb65507cc83fe191b1e57bbd9845e5e7784bcc8d61e226f3822d0",
    },
    qa: BasePointHex {
        x0: "c7461738340efcf09ce388f666eb38f7f3afd42dc0b664d9f461f31aa2edc6b4ab71bd42f4d7c058e13f64b237ef7ddd2abc0deb0c6c",
        x1: "25de37157f50d75d320dd0682ab4a67e471586fbc2d31aa32e6957fa2b2614c4cd40a1e27283eaaf4272ae517847197432e2d61c85f5",
        y0: "6017700c715fbe1aece88d332b6749b20d743b7859d503c390d78405c9bd5ee7e86fa12f2b0e6c0ceedbd9b6db5a09b101eb4913681a",
        y1: "14c405e5443f3c8152a2e47e844cc7dbef8d6ac9388ac45f08ab9fab1627c1653ac5a8d5da2e61eb9b4af6268d8d5189e9a84b89a4c29",
    },
    ra: BasePointHex {
        x0: "f37ab34ba0cead94f43cdc50de06ad19c67ce4928346e829cb92580da84d7c36506a2516696bbe3aeb523ad7172a6d239513c5fd2516",
        x1: "196ca2ed06a657e90a73543f3902c208f410895b49cf84cd89be9ed6e4ee7e8df90b05f3fdb8bdfe489d1b3558e987013f9806036c5ac",
        y0: "1b4b97413ce357b4846b44a6402341189493fe262a5fd4caa4020cc1f14aeedea90dfed34fd637e60cccf09642a38c33365e0e3f932ea",
        y1: "1bf8e916be90da4ba63e4276eaeaffbe80c551e3c3ab3116144b2fe8d251ec70412f5f419c398f93276c10772cd33899139813fa912cc",
    },
    pb: BasePointHex {
        x0: "8664865ea7d816f03b31e223c26d406a2c6cd0c3d667466056aae85895ec37368bfc009dfafcb3d97e639f65e9e45f46573b0637b7a9",
        x1: "0",
        y0: "1c93a11be34d0d59bce3ef3c9494aa1b885bb826cb0cf02a301ed05612c02309868d93985c4d33ed4c67fa4cd49ed1fa75bd7f89bbbc4",
        y1: "0",
    },
    qb: BasePointHex {
        x0: "12e84d7652558e694bf84c1fbdaaf99b83b4266c32ec65b10457bcaf94c63eb063681e8b1e7398c0b241c19b9665fdb9e1406da3d3846",
        x1: "0",
        y0: "0",
        y1: "148748050421d5688a0e99d5d22f7a1fa32ccdb0ccfcc3fd6ce0d111f0220c66123364b637d610ac38285ca3c5f8ba28c3bdb04b5a02d",
    },
    rb: BasePointHex {
        x0: "1cd28597256d4ffe7e002e87870752a8f8a64a1cc78b5a2122074783f51b4fde90e89c48ed91a8f4a0ccbacbfa7f51a89ce518a52b76c",
        x1: "147073290d78dd0cc8420b1188187d1a49dbfa24f26aad46b2d9bb547dbb6f63a760ecb0c2b20be52fb77bd2776c3d14bcbc404736ae4",
        y0: "159a48e2d4cfdd1782116f4a63f666d5ed591b0ac5b449dcf0955616ab636a6b68271704eb4e40989b42d845168f2f86e50f6e1cbb0dd",
        y1: "1ebaed72b6f7411f5872e68472fc9327f781327b97ceca15dce1540c35d52be58b0faf8b1623c0ba3a5d908be5f15e0c3d19325f44cbb",
    },
    strategy_a: &STRATEGY_A,
    strategy_b: &STRATEGY_B,
    tree_points_a: 8,
    tree_points_b: 9,
    chain_start: 8,
    pow_strategy: &POW_STRATEGY,
    mul_strategy: &MUL_STRATEGY,
};
