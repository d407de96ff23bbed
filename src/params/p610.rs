//! SIKEp610: p = 2^305 * 3^192 - 1

use super::{BasePointHex, ParamConstants};

const STRATEGY_A: [usize; 151] = [
    65, 38, 21, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1,
    1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 9, 5,
    3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2,
    1, 1, 17, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4,
    2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 1, 2, 1, 1,
    4, 2, 1, 1, 2, 1, 1, 28, 16, 9, 5, 3, 2, 1, 1, 1,
    1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 7, 4, 2,
    1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 12, 7, 4, 2,
    1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 2, 1, 1, 1,
];

const STRATEGY_B: [usize; 191] = [
    78, 48, 28, 16, 9, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1,
    1, 4, 2, 1, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1, 1, 2,
    1, 1, 3, 2, 1, 1, 1, 1, 12, 7, 4, 2, 1, 1, 1, 2,
    1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2,
    1, 1, 1, 20, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2,
    1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 8,
    5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1,
    1, 1, 30, 20, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2,
    1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 8,
    5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1,
    1, 1, 12, 7, 4, 3, 2, 1, 1, 1, 1, 2, 1, 1, 3, 2,
    1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1,
];

const POW_STRATEGY: [u8; 112] = [
    5, 4, 5, 6, 4, 6, 11, 8, 6, 8, 6, 3, 7, 3, 8, 4,
    6, 7, 6, 7, 4, 5, 6, 4, 8, 5, 6, 6, 4, 6, 6, 3,
    6, 9, 8, 4, 6, 6, 3, 8, 1, 9, 5, 6, 6, 6, 6, 1,
    11, 7, 1, 13, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3,
];

const MUL_STRATEGY: [u8; 112] = [
    13, 7, 6, 9, 5, 8, 12, 0, 1, 4, 8, 3, 15, 1, 8, 4,
    12, 10, 13, 11, 6, 0, 1, 0, 4, 4, 10, 6, 3, 7, 15, 2,
    2, 4, 15, 7, 6, 11, 1, 11, 0, 9, 7, 8, 10, 5, 10, 0,
    11, 13, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3,
];

pub(super) const CONSTANTS: ParamConstants = ParamConstants {
    name: "SIKEp610",
    prime: "27bf6a768819010c251e7d88cb255b2fa10c4252a9ae7bf45048ff9abb1784de8aa5ab02e6e01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    e_a: 305,
    e_b: 192,
    msg_bytes: 24,
    crypto_bytes: 24,
    pa: BasePointHex {
        x0: "1b368bc6019b46cd802129209b3e65b98bc64a92bc4db2f9f3ac96b97a1b9c124df549b528f18beecb1666d27d47530435e84221272f3a97fb80527d8f8a359f8f1598d365744ca3070a5f26c",
        x1: "1459685dca7112d1f6030dbc98f2c9cbb41617b6ad913e6523416ccbd8ed9c7841d97df83092b9b3f2af00d62e08dad8fa743cbcccc1782be0186a3432d3c97c37ca16873bede01f0637c1aa2",
        y0: "1cd75cf512ffa9df878ef495001a57abc07fc7ce9bb488bb52ddcd7272d8a4fd17dd258ed3f844c862cf48803b9ac2668c7cb79c396128763b578080c30d14ca7eb709f98e3e682a391fb35a7",
        y1: "2001062a6289e4082ced884029207a1acdec525d7bc165a6cff8bb469a8588950a416dbb924d2d673e3d6c32d232f6e6ada62b37608f652c0b8628827b304bf1365d8211346207b24eff09458",
    },
    qa: BasePointHex {
        x0: "25da39ec90cdfb9bc0f772cda52cb8b5a9f478d7af8dbba0aeb3e52432822dd88c38f4e3aec0746e56149f1fe89707c77f8ba4134568629724f4a8e34b06bfe5c5e66e0867ec38b283798b8a",
        x1: "2250e1959256ae502428338cb4715399551aec78d8935b2dc73fcdcfbdb1a0118a2d3ef03489ba6f637b1c7fee7e5f31340a1a537b76b5b736b4cdd284918918e8c986fc02741fb8c98f0a0ed",
        y0: "a4fd5539025c0611e4b1cec3c36f0d7590c035d3a25ad93022849cceb3f67e4b1dbe988404290dd8b87b8d5e69ed3b0c5cdbca248dc9d174cf762012cfe2d725cfd92057f2dbf8b04c7b12cc",
        y1: "201c807bd738624e22b87554a2e053a46a9573ba863d4a9d309533e30b27bf7dd8137f5ce0f79c263d9d050541d69817a839085a76395f879315f6999e3441fc8fb3936dee1bef5b4e0e25096",
    },
    ra: BasePointHex {
        x0: "1b36a006d05f9e370d5078cca54a16845b2bff737c865368707c0dbbe9f5a62a9b9c79adf11932a9fa4806210e25c92db019cc146706dfbc7fa2638ecc4343c1e390426faa7f2f07fda163fb5",
        x1: "183c9abf2297ca69699357f58fed92553436bbeba2c3600d89522e7009d19ea5d6c18cff993aa3aa33923ed93592b0637ed0b33adf12388ae912bc4ae4749e2df3c3292994dcf37747518a992",
        y0: "238a9a93f5903e6255d98642cb874f1cca78397fb790946da62068f019cec14e5ed618c8e3a0630ad07f28067790385767e94fa539ef67e8be0ea264afcca6dfe3c4f72f8ed275801542163bb",
        y1: "21aa050780357a59f6b2a94cf2bf300f5ca7bcdbbe96a206a635473c6360418f663e8ee10dee59e6d11803cba45ed44449dd67324654f2b2d16af4f826a0bbd83cf2834ba74e45d433a6f8dcd",
    },
    pb: BasePointHex {
        x0: "1587822e647707ed4313d3be6a811a694fb201561111838a0816bfb5dec625d23772de48a26d78c04eeb26ca4a571c67ce4dc4c620282876b2f2fc2633ca548c3ab0c45cc991417a56f7fefeb",
        x1: "0",
        y0: "26704125736263c4bb7276abc33509828ff7859aaf430d163650bf04201a2de16b3321fb13ae15fcf6b9d56bbb2db018ab99924db8ff7f6ae4ce3d53a68fb543898f3c3c566d3c3e9d686e0cf",
        y1: "0",
    },
    qb: BasePointHex {
        x0: "14e647cb19b7eaaac640a9c26b9c26db7deda8fc9399f4f8ce620d2b2200480f4338755ae16d0e090f15ea1882166836a478c6e161c938e4eb8c2dd779b45ffdd17dcdf158af48de126b3a047",
        x1: "0",
        y0: "0",
        y1: "e674067f5ea6de85545c0a99e9e71e64fabfdc281d1e540feda47a56ed3adcdde1841083fabc7954b467c71ac6349b04974a7f9b688c5f735632feb394146b0a080880069d8da3324edf795b",
    },
    rb: BasePointHex {
        x0: "1db73bc2de666d24e59af5e23b79251ba0d189629ef87e56c38778a448face312d08edfb876c3fd45ecf3746d96e2cadbba08b1a206c47ddd93137059e34c90e2e42e10f30f6e5f52ded74222",
        x1: "c933a5e7a69a37a9e0927ba3c2693c553ba22cb2e3938e32dbc8e1a173553533c2baacec6e680cb1ca4085efac358902883f5051c71df6e79d54b0e22b372637c21c8534599b9124b3dc74b7",
        y0: "65e3a1a265ca18b9c0d8a8b12ebb9ee21e90bfa6489d3c5104980858a3e510518e55d416bb82dbd1d29df508e6e2a049cf38283f1ae5fe2880594b48efc8eb67f530b6cb1863308b48f1e825",
        y1: "f6a490f49872b6fd1b082926e328533ab786e1166771c7730f40183a5e7729f554f2029c030c4c0af8b4e53c24ed5c46e446acab7c07f78a363617e23cddc6000e2eaf2a9fa62204c972d406",
    },
    strategy_a: &STRATEGY_A,
    strategy_b: &STRATEGY_B,
    tree_points_a: 9,
    tree_points_b: 10,
    chain_start: 9,
    pow_strategy: &POW_STRATEGY,
    mul_strategy: &MUL_STRATEGY,
};
