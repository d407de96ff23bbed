//! SIKEp751: p = 2^372 * 3^239 - 1

use super::{BasePointHex, ParamConstants};

const STRATEGY_A: [usize; 185] = [
    79, 48, 27, 15, 8, 4, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1,
    1, 2, 1, 1, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1,
    1, 1, 12, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1,
    1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4,
    2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2,
    1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 32, 20, 12, 7, 4,
    2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 2,
    1, 1, 1, 4, 2, 1, 1, 2, 1, 1, 15, 8, 4, 2, 1, 1,
    1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1,
    2, 1, 1, 3, 2, 1, 1, 1, 1,
];

const STRATEGY_B: [usize; 238] = [
    94, 56, 34, 21, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1,
    1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1,
    1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1,
    1, 1, 3, 2, 1, 1, 1, 1, 1, 13, 8, 5, 3, 2, 1, 1,
    1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3,
    2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 22, 13, 8, 5, 3, 2,
    1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1,
    5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2,
    1, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1,
    1, 38, 22, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1,
    1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1,
    2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1,
    1, 4, 2, 1, 1, 1, 2, 1, 1, 16, 9, 5, 3, 2, 1, 1,
    1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 7,
    4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1,
];

const POW_STRATEGY: [u8; 137] = [
    5, 7, 6, 2, 10, 4, 6, 9, 8, 5, 9, 4, 7, 5, 5, 4,
    8, 3, 9, 5, 5, 4, 10, 4, 6, 6, 6, 5, 8, 9, 3, 4,
    9, 4, 5, 6, 6, 2, 9, 4, 5, 5, 5, 7, 7, 9, 4, 6,
    4, 8, 5, 8, 6, 6, 2, 9, 7, 4, 8, 8, 8, 4, 6, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 2,
];

const MUL_STRATEGY: [u8; 137] = [
    15, 11, 10, 0, 15, 3, 3, 3, 4, 4, 9, 7, 11, 11, 5, 3,
    12, 2, 10, 8, 5, 2, 8, 3, 5, 4, 11, 4, 0, 9, 2, 1,
    12, 7, 5, 14, 15, 0, 14, 5, 6, 4, 5, 13, 6, 9, 7, 15,
    1, 14, 11, 15, 12, 5, 0, 10, 9, 7, 7, 10, 14, 6, 11, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 1,
];

pub(super) const CONSTANTS: ParamConstants = ParamConstants {
    name: "SIKEp751",
    prime: "6fe5d541f71c0e12909f97badc668562b5045cb25748084e9867d6ebe876da959b1a13f7cc76e3ec968549f878a8eeafffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    e_a: 372,
    e_b: 239,
    msg_bytes: 32,
    crypto_bytes: 32,
    pa: BasePointHex {
        x0: "4514f8cc94b140f24874f8b87281fa6004ca5b3637c68ac0c0bdb29838051f385fbbcc300bbb24bfbbf6710d7dc8b29acb81e429bd1bd5629ad0ecad7c90622f6bb801d0337ee6bc78a7f12fdcb09decfae8bfd643c89c3bac1d87f8b6fa",
        x1: "158abf500b5914b3a96ced5fdb37d6dd925f2d6e4f7fea3cc16e1085754077737ea6f8cc74938d971da289dcf2435bcac1897d2627693f9bb167dc01be34ac494c60b8a0f65a28d7a31ea0d54640653a8099ce5a84e4f0168d818af02041",
        y0: "63eef05a548d73a39a3568a4c7b85b375aac20132981400f1384fd0590f73c72e1883e68197e4d85ba680955b805432893072577870edcda4074f306d1ba51ff9d8fbe376e4369004478b03a781bcbd087f67da720d1ef5a8f758f5f2a57",
        y1: "5ae2d9fddf8ef01a864c1235c29ab63f7520d521fb7f0e6a84e0d3250cfa58656b5a5c0e5b22edec769c39cb53114284cff5e39962e5d7fc072fa45c4e0d5340d843e5ed84b5aac6e929dffb02de9cc3a515548b7cc7ac4b3a3bd148e081",
    },
    qa: BasePointHex {
        x0: "1723d2bfa01a78bf4e39e3a333f8a7e0b415a17f208d3419e7591d59d8abdb7ee6d2b2dfcb21ac29a40f837983c0f057fd041ad93237704f1597d87f074f682961a38b5489d1019924f8a0ef5e4f1b2e64a7ba536e219f5090f76276290e",
        x1: "2569d7eafb6c60b244ef49e05b5e23f73c4f44169a7e02405e90ceb680cb0756054ac0e3dce95e2950334262cc973235c2f87d89500bcd465b078bd0debdf322a2f86aedfdcfee65c09377efba0c5384dd837bedb710209fbc8ddb8c35c7",
        y0: "35b82d1bd2ba608b42794c4820c56a3d8bbad28380b8d85a1910e2609a61f7bc0bca8ed8ef883e7e98c744a0ac85d2893738521b62eb23d1983d2edcf2ab437108dc048aa853ff9bc791224b121e8fdf1ea5f617e6ed5898663dded49154",
        y1: "f22306a6963907f16aa38f89c672a4054db5fd1d26598a3140ea204b10094ae64093142aeb056942494d216a74ed9f51ffc9272d1772151013334ec570b532db0c083cf39867f63d191029033f942e977b85f69ec738b4c26d3b72e2821",
    },
    ra: BasePointHex {
        x0: "1abd427520c1a9e157884303967aed1d1282656d02eaca2e9bf42c6e9cefc207a101eb179b7247e2448a99835efef429fcab85045f5d37f3a24b7282d563cd0a5f442adc8575a47eb216605963acc410dbc03a2804ccd74397dd0d194a15",
        x1: "652a06e824c12a93a362b139117f2ca03620aeb522ecd6ac93b3342ea4edc8b7eb2ee233e380ef28ba1a270b9c29252e79a915bf0b183ffa762f0f217131e6553e5d70b8817b7ea1e4400d5a5d08b00e617a49fb6a90781bbdfe9d928526",
        y0: "3bde4c91d811336f5a268984b116e974a3bcc4a56d2e4878ead534242fe895453eb0e6f13c7e90f94d0075972abaeda17f67a58a0d84668f1c4fa78ad4daa756cb9bba48f4dc0a63190149012e5f46f43b31d2e4a1897a6da0c624642b09",
        y1: "6007a1ca7ab33cf471d58cfcb04ab27ce8716da994061935c23dd4c4dae262aa5431624efb6fb25a42df4864fde3a179d28e73f989faae17635252b9a8b86d9e78381883ba3da7ebc769dbd277db4019081ceefe92f79cb6fa0e5f0fb4fb",
    },
    pb: BasePointHex {
        x0: "605d4697a245c394b98024a5554746dc12ff56d0c6f15d2f48123b6d9c498eee98e8f7cd6e216e2f1ff7ce0c969cca29caa2faa57174ef985ac0a504260018760e9fdf67467e20c13982ff5b49b8beab05f6023af873f827400e453432fe",
        x1: "0",
        y0: "5634690bfc14c45e2faa930d62589855e5bdd1435cffbdf609628fd043b4bf295bb35f7b6d37836f2c59a27bb61ed0ff57ff8093fe6b712133d26502f17cb0d46cdc8cf9ba7664ea2b6c1672a8ca2ff1ce313feeef4199fc7f14fe720617",
        y1: "0",
    },
    qb: BasePointHex {
        x0: "5bf9544781803cbd7e0ea8b96d934c5cbca970f9cc327a0a7e4dad931ec29baa8a854b8a9fde5409af96c5426fa375d99c68e9ae714172d7f04502d45307fa4839f39a28338bbafd54a461a535408367d5132e6aa0d3da6973360f8cd0f1",
        x1: "0",
        y0: "0",
        y1: "3351f421fc158472ac2dd8b4dabb5b599456748a5bcc4449398f05ed1ad1414b4eebbb70fb91383474b712ea4b5bf096092cddd57c0a090b041022064c3a8dd3d890e7b5ac34a24cef507955f027cc4cecfdb67739ce89f31fdc5fe43243",
    },
    rb: BasePointHex {
        x0: "55e5124a05d4809585f67fe9ea1f02a06cd411f38588bb631bf789c3f98d1c3325843bb53d9b011d8bd1f682c0e4d8a5e723364364e40dad1b7a476716ac7d1ba705ccdd680bfd4fe4739cc21a9a59ed544b82566bf633e8950186a79fe3",
        x1: "5ac57eafd6cc7569e8b53a148721953262c5b404c143380adcc184b6c21f0cafe095b7e9c79ca88791f9a72f1b2f3121829b2622515b694a16875ed637f421b539e66f2fef1ce8dcefc8aea608055e9c44077266ab64611bf851ba06c821",
        y0: "4a36b4d126fd7a2f6067d94f1080b45224fbb609fc0f652367978f3b2f32a3634b2dabbc725d31c909b9464757b5b370dc1553fd7a0ea9816de26dec5cf78a787790b80c646fa77ce6ee984a33e0ef60dd76becba83af6551cfe3058ae32",
        y1: "3c9d999c9846fb502dfc5945693db5b2c9b7bf90ac772dd2f42e4fc546735ac07247250f797711a5d4a5e59a62336d162eab108427859f56710a3c7b125449fe7054d99885465d2589a6479ba51c46ef7783734cb370acba8d4b2d537e48",
    },
    strategy_a: &STRATEGY_A,
    strategy_b: &STRATEGY_B,
    tree_points_a: 9,
    tree_points_b: 11,
    chain_start: 13,
    pow_strategy: &POW_STRATEGY,
    mul_strategy: &MUL_STRATEGY,
};
