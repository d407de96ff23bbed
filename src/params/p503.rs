//! SIKEp503: p = 2^250 * 3^159 - 1

use super::{BasePointHex, ParamConstants};

const STRATEGY_A: [usize; 124] = [
    55, 32, 17, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4,
    2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 1, 2, 1, 1,
    4, 2, 1, 1, 2, 1, 1, 15, 8, 4, 2, 1, 1, 1, 2, 1,
    1, 4, 2, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1, 2, 1, 1,
    3, 2, 1, 1, 1, 1, 23, 15, 8, 4, 2, 1, 1, 1, 2, 1,
    1, 4, 2, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1, 2, 1, 1,
    3, 2, 1, 1, 1, 1, 9, 6, 4, 2, 1, 1, 2, 1, 1, 2,
    2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1,
];

const STRATEGY_B: [usize; 158] = [
    65, 38, 22, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1,
    1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1,
    2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1,
    1, 4, 2, 1, 1, 1, 2, 1, 1, 16, 9, 5, 3, 2, 1, 1,
    1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 7,
    4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 27, 16,
    9, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1,
    1, 1, 2, 1, 1, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2,
    1, 1, 1, 1, 11, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2,
    1, 1, 1, 1, 4, 3, 2, 1, 1, 1, 1, 2, 1, 1,
];

const POW_STRATEGY: [u8; 91] = [
    12, 5, 5, 2, 7, 11, 3, 8, 4, 11, 4, 7, 5, 6, 3, 7,
    5, 7, 2, 12, 5, 6, 4, 6, 8, 6, 4, 7, 5, 5, 8, 5,
    8, 5, 5, 8, 9, 3, 6, 2, 10, 6, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3,
];

const MUL_STRATEGY: [u8; 91] = [
    12, 11, 10, 0, 1, 8, 3, 7, 1, 8, 3, 6, 7, 14, 2, 14,
    14, 9, 0, 13, 9, 15, 5, 12, 7, 13, 7, 15, 6, 7, 9, 0,
    5, 7, 6, 8, 8, 3, 7, 0, 10, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3,
];

pub(super) const CONSTANTS: ParamConstants = ParamConstants {
    name: "SIKEp503",
    prime: "4066f541811e1e6045c6bdda77a4d01b9bf6c87b7e7daf13085bda2211e7a0abffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    e_a: 250,
    e_b: 159,
    msg_bytes: 24,
    crypto_bytes: 24,
    pa: BasePointHex {
        x0: "2ed31a03825fa14bc1d92c503c061d843223e611a92d7c5fbec0f2c915ee7eee73374df6a1161ea00cdcb786155e21fd38220c3772ce670bc68274b851678",
        x1: "1ee4e4e9448fbbab4b5baef280a99b7bf86a1ce05d55bd603c3ba9d7c08fd8de7968b49a78851ffbc6d0a17cb2fa1b57f3babef87720dd9a489b5581f915d2",
        y0: "1c1995c035bbcaf7c48ddac2855b5a3605462cca2219962ddf012aae576809bc12eba2051e4de57484ede0105e49174ad0ffb87de7a7619fb468ca647591f0",
        y1: "284a28a274600acf79b2a93be9bc41340263ee495b6fc160a956df4409f55e02fa8c99f9f34a66d82492374df194ea8b8ea91c3acffaba1698bb7854c6c358",
    },
    qa: BasePointHex {
        x0: "325cf6a8e2c6183a8b9932198039a7f965ba8587b67925d08d809dbf9a69de1b621f7f134fa2dab82ff5a2615f92cc71419fffaaf86a290d604ab167616461",
        x1: "3e7b0494c8e60a8b72308ae09ed34845b34ea0911e356b77a11872cf7feeff745d98d0624097bc1ad7cd2adf7ffc2c1aa5ba3c6684b964fa555a0715e57db1",
        y0: "63290018060d1ade4a6a61d1d8b6a71a356e75f28a8973376a33e8d1ceddb2065622fa96eaa8c0123f6332b66817dc878a61ff5d21dda31fba762dfe028ab",
        y1: "26880458ee0fcd3ca398896f57a8fcbcebe2771700f6a66e8507666fbe4bce43f912efa5d60d2c08155d9dbd9569acc787d3a2df040b871b2e372403a47d6b",
    },
    ra: BasePointHex {
        x0: "3d24cf1f347f1da54c1696442e6afc192cee5e320905e0eab3c9d3fb595ca26c154f39427a0416a9f36337354cf1e6e5aedd73df80c710026d49550ac8ce9f",
        x1: "6869ea28e4cee05dcee8b08acd59775d03daa0dc8b094c85156c212c23c72cb2ab2d2d90d46375aa6d66e58e44f8f219431d3006fded7993f51649c029498",
        y0: "9bfb741c5a9b4b9b42e3a1ec568499a6ae5aa3801515f8079a416de7d7c7cd2ff5f662ddb6ac6eaab34d65d4639c53b94cb99f08ed4c6bc29a73e26ef596d",
        y1: "351460251f77862bfdc31b151150eb8e344a3a8594f19805dd9ef6356b54dadd2a9a76ffda15d02217794c68ef3832117d686a76ed8efc55e190783c848965",
    },
    pb: BasePointHex {
        x0: "32d03fd1e99ed0cb05c0707af74617cbea5ac6b75905b4b54b1b0c2d73697840155e7b1005efb02b5d02797a8b66a5d258c76a3c9ef745cece11e9a178badf",
        x1: "0",
        y0: "2d810f828e3dc024d1bbbc7d6fa6e302cc5d458571763b7ccd0e4dbc9fa1163f0c1f8f4ae32a57f89df8d2586d2a06e9fa30442b94a725266358c45236adf3",
        y1: "0",
    },
    qb: BasePointHex {
        x0: "39014a74763076675d24cf3fa28318dac75bcb04e54addc6494693f72ebb7da7dc6a3bbcd188dad5bece9d6bb4abdd05db38c5fbe52d985dcaf74422c24d53",
        x1: "0",
        y0: "0",
        y1: "1b15d52eb813b5f681142240022acd1b302ee96f86db5ca9014846826d6787fdc1db6429c966414c47215dea4851e4a5cf01c8e49b3a0e4f40fae5ee2971fb",
    },
    rb: BasePointHex {
        x0: "c1465fd048ffb8bf2158ed57f0cfff0c4d5a4397c7542d722567700fdbb8b2825cab4b725764f5f528294b7f95c17d560e25660ad3d07ab011d95b2cb522",
        x1: "17e58ffb18956041cceb8a4a42c21753de06803f8402f5cf28bb7ef4fad56f32e996f0a18ec8bf18382b7c7d69198ca823cb1cb9f56a3ccf2ae968de67e8a7",
        y0: "2cf4a0805b28410218ff7589db37c3fcc36c26709ae9c5970a3a924443d07023dd12eaa9623c8cac6580c828f2717d4418b3c1561bcc54dbffb73b0d7fb560",
        y1: "17f04d286f07ec1f049b730f911932ec19ad051576aee5d189ae4cb12b9abca074444d1c27355ac028574cf29882828430dee874953818d9876af8e24aa52f",
    },
    strategy_a: &STRATEGY_A,
    strategy_b: &STRATEGY_B,
    tree_points_a: 8,
    tree_points_b: 10,
    chain_start: 0,
    pow_strategy: &POW_STRATEGY,
    mul_strategy: &MUL_STRATEGY,
};
