//! Random numbers used by the polyglot-style hash function.
//!
//! The classic Polyglot opening book format keys entries by a Zobrist hash
//! built from a fixed table of 781 pseudorandom 64-bit constants (768 for
//! piece/square, 4 for castling rights, 8 for en passant files, 1 for side
//! to move). This table is generated once from a fixed seed rather than
//! reproduced from the canonical published constants, so it is internally
//! consistent for books generated and read by this engine but will not
//! match externally distributed .bin opening books byte-for-byte.

#[rustfmt::skip]
pub const POLYGLOT_RANDOMS: [u64; 781] = [
    0x07692a96f64ba938, 0x97bba19657830ed4, 0xbdf70c24856c8919, 0x49627365ee06aed7,
    0xe818bfb37a97c56f, 0x1d98ade14d967c89, 0x63b806e65e8ad738, 0xe166197f9c314423,
    0x330f41809f2ed116, 0x53ea375045ec2695, 0x6903f63ab055ad89, 0x0eb82519d12d36e9,
    0x6b32669ae6948cbc, 0xff1412a42a9d816f, 0x523361d2491d1c9c, 0x59ff34e285fa1e60,
    0x3e2cdcf595a1d0a1, 0x73217a65363acddc, 0x7b7725ed4c934e8f, 0x5953d833541419a0,
    0x007b2e70fe721a48, 0x60e5240a3b0291b3, 0x00b08e88355de3c8, 0x3edda0ee14ec86de,
    0x140a853f57ca3790, 0xd61bfe3688b005c9, 0xff4f31e728b14ec9, 0xe6473eb54039989f,
    0x1d2498c8bf0a5d16, 0xcc121996400fd9c1, 0x6986a1c92537d820, 0x45c958bed9b638b7,
    0xacf9838c243c79c7, 0x5eb0560fe60a0893, 0xe7a714f4e1906905, 0x0dc55d0f62f7ebfd,
    0x744e233bc0d916b7, 0x2cba3fbc9a106149, 0x4416257d93c0254d, 0xfe589087a613f120,
    0x7bc7c54f6ede80af, 0xa99b8666882c7118, 0x0ed2fcc105f4d24d, 0x251673bb2874a088,
    0x357bf8e3b86b5c15, 0xe33d38ff8f6aa739, 0xdc609e2a18e71706, 0x96406c85b6ee431c,
    0x448b9226b5e19e66, 0x1ef8f50bb4f37c1a, 0x4c4c7a97b4d454ff, 0x366178ffa0f91a73,
    0x64fdf61781738b6b, 0xde1d9e5483e7aa8a, 0x8b57b7faa878a0b0, 0xce83f0f1f89ed0e1,
    0x534c49badb147817, 0x294305cc120c96e3, 0x2038acc9cfcb6247, 0xca8ce1ad6868f486,
    0x8179835074d01c41, 0x8719d60fb6a057ac, 0x94159d761c07c078, 0xbe119bacc623e94c,
    0x145a33ca2f6cdf78, 0x9038a03ca92a4c02, 0x970be95737fc9537, 0x734354cef05248f7,
    0x483fe4e7d92dc67b, 0xcd1517ca0221204f, 0xd7fc18a8a2a1191b, 0xb42b20f60bfbe677,
    0xa18d503b7cbd0d62, 0xf1b0116526b79348, 0x4d0dec4dae80ac67, 0xfa9d5a0c3f35c066,
    0x1178e36976be027e, 0x8cda8b3b3ef2b602, 0x5b582e269586be15, 0xb456129780dda1a3,
    0xc9ec7881a11726b5, 0xab262a987a11d74c, 0x5daae9741cb3c05b, 0xd95f77114258906b,
    0xa0df8c77a4c7b2a5, 0x3df51df7bee9aa16, 0x5b49de209dac9737, 0x6a73ab1c73058c30,
    0x84a35f538ad502a5, 0xadacaa7090f9eacd, 0xafc654ce2b7073d9, 0xdef4a5c4188352be,
    0x1ac02d32de3e3347, 0xf6cc4a546098f0a3, 0x41a8c4900d9e276d, 0x899999d671222c72,
    0x888526bcc94710f9, 0xfcb5449ed9214d40, 0x2a143520dac4e056, 0xcb6da504c1d541b0,
    0x565e0b070d53a894, 0x319d711277a89b1d, 0x14fc01ec96f47ec8, 0x81a007a06118c886,
    0x52cf525137735002, 0x4a0fc7675181c8b9, 0x10681e282b9fb5ea, 0xba959bcefd97fc6b,
    0xabdf0c2db69ef376, 0x6d622041170520e8, 0x83f5ac1908edd5d2, 0xb84f31b083a951a7,
    0x032e042fd9179efd, 0xf9aba0a7ded612f0, 0x6b426584a11b6ac2, 0x0af7aac13c22bd30,
    0x90f962ce0a46b8f8, 0xdc20989be9ef74f9, 0x3e1f9f1a92ca4da1, 0x80978f7d70dccf7b,
    0x9d900e120369d138, 0x65194d4d0a6105a6, 0x54a239c5fb47e167, 0x923f9c95104a093d,
    0xb743934e068e5a54, 0x0a77189b741d299f, 0xa86e40b29eb4df20, 0xfb5481945ec6d425,
    0x3be8e3aafe7fbe5b, 0xb7d453c02f9e52a3, 0x9344c51b96218def, 0x6031db4fcca9c333,
    0x8252d2eb41fa7437, 0x09197e6724c38f3e, 0x608de72a65aced14, 0x148291e5ed004dcf,
    0xba47e7967543023f, 0x5aed959f2f9788ff, 0x1514fcc384890a65, 0x75bea19dd11fdbfc,
    0x97e9077ad2b4811a, 0x6ab1c2b08e83b2ff, 0xfb541129a5dd1936, 0x33daa6d1c1466b45,
    0x0b5a26d0d96c020c, 0xcbfbc1ad87a053e5, 0x3a3e0edaa61e2d61, 0xa8f169e3ba58500a,
    0x9f0280ed93c3aabf, 0x5fb4d6e1882bfcd6, 0x9d2caa15a85e7307, 0x882faf9f0b3826a2,
    0xb48b967a53c96a92, 0xd02aa6f947e15cdc, 0x38f1a140c191312a, 0x2e3c9f05e7edcba2,
    0x478bb1f5dd81b87b, 0xadb14c505b64b438, 0x0df1a24348d4d579, 0x4f53f6a1068b49a0,
    0x647bb49fe2dd0d5f, 0x522e7b5e7d273d4f, 0xae7aeac9422aacc2, 0x59a857b3bc618a88,
    0x46633c1fcd8bb14d, 0xbebcb7586c769ce3, 0xe91a477a80b56463, 0x75a297dde9b688ef,
    0xb6074468dee00ef2, 0x3d4c02ce8bad8f28, 0xda672149d1057a10, 0xfaeeffb21627b32e,
    0xfba2ed343abb537a, 0x50f6b592c8cd107e, 0xf07bb547c23d8da7, 0x767a485a628d2f42,
    0x64b0837ec72bf31e, 0x8ea2c4d14cf5fdf8, 0xa76d0f316038a9e6, 0x77dbe9b53326a7aa,
    0x8c9762a988530792, 0x153aae0d252dd2fb, 0x1380002dc5ad1c37, 0xcbc0aa0ee6c821dc,
    0x4f3e05e24f7cd4d6, 0x318ccb41f68a9586, 0x451b3804ae844f2c, 0x1f52261ccb1547a5,
    0xb50870c658d93550, 0x6d7a6c52e01fc987, 0xd5c8697cc96acd05, 0x866122d34c7fb1d8,
    0xec0c8e39ae4eac11, 0xd2772a55015b8298, 0x8d53591048e31a52, 0x840f401622f23194,
    0x6c52129d60b1140b, 0xd3554d1058bf1ae4, 0x3208a3a3259c678d, 0xadefc738f2f645d8,
    0x3276462dbbfc9f15, 0x9db2f5e0cb5a9ba4, 0xba297b14b4279757, 0x0bcdf1ca98bd8f19,
    0x826f8f388054270f, 0x7325145b510c1299, 0x891780a036735dc8, 0x31aa12d231ced0e3,
    0x9b01ad021f16c8b1, 0xdabac4c41fd4b197, 0xffb82450fa6326ba, 0x1ae9a17ea95ae100,
    0xd19ed2f30b765d7f, 0x2a9bdf17125da3da, 0xa92d22f3fd2c7f15, 0x6515efb9e406dc0d,
    0xaf160abdc322bf1b, 0x51bf9d720e498a32, 0x3714c57cf7fc852e, 0x86e35bce5773dcff,
    0xf906387e58f43758, 0x5d2fd81325e2a4ae, 0x93d4ec6ddd4e112b, 0xd45f15324951f210,
    0x3e10e22f27b25669, 0x75ff6a423557ba17, 0x05f83c0427fac6b5, 0x423952524f7d43c0,
    0xc3a3495294305a8b, 0xabc1629813e12fe6, 0xb3fe5fd71b9af97e, 0x4cd0f799141e839f,
    0x39db041731e866f1, 0xcf3d672dec6ac16c, 0x0a8dce734bd098f0, 0xa88443e808c2b4b6,
    0x0670b15e3a359357, 0x7e036f518a40f072, 0xbedb6bfa68e64bec, 0x86d560ad2b5a8fda,
    0x68396e08deeb7e72, 0xe6f71975b7fc6273, 0x355ffca808d4a579, 0x15423bda3ead9653,
    0x8c500cb59ba6340d, 0x6c32f9a582ab8c11, 0x6684c22cf23a05ca, 0x526f4af5f23d22d0,
    0x52c5e70045114ebf, 0x48e4791874c14989, 0xa704acec8ac1996a, 0x65d474fc70a25153,
    0x5fd11780ea3ea670, 0x969acce44fdf5771, 0xb19160db8d781113, 0x81df496a687b1533,
    0x81af09635514806c, 0xf919eeefbdd3b4f7, 0x982ea14140495911, 0x054671f62adc810b,
    0x684c18c649d3fdd5, 0x615a7a430a03212f, 0x16585f8dd1d80140, 0xdb97d6f5644465ad,
    0x29e5408e7eceb60d, 0x24f17e45d35f1575, 0x43051a6923cea190, 0x148febdffbe89602,
    0xd76fd1d5821547d6, 0x65f01e1b75f12148, 0x6c868c7360ec36f3, 0x7fe0ffbc854e997f,
    0x68fc774782f03f4a, 0xddfdb6aa63ce02e4, 0x6cda198254ddc9af, 0x32e14a16860a81fa,
    0xdd24c2bdb6220da7, 0xf2cfe1e6cac63676, 0xb6b178bdb35cd214, 0x303d1efacea8dd22,
    0x3e5748241ddd2598, 0xb463d92199323ecc, 0xaf9ad65b4e5eea79, 0xccecdfc05b44e577,
    0x8b2ec17bb424597e, 0x4f68a8e6bc6a2abc, 0x1b70c9e5a64aa1ee, 0xb49416bcc9a04ac8,
    0x76a07ae3b7179e50, 0xed98eeacf482fb53, 0x41117f5745b42292, 0x27da0d128ee0026f,
    0xa74d3e2f3b9d8e5e, 0xffd28e2b45c4eb20, 0xe5f3cc36ebdf453f, 0x94fa650e21d561f2,
    0x398c4eac4b8f163f, 0xe5161bcc7e55b9ac, 0x8fb5fd4cc82b2dc5, 0x8288a8141a252f09,
    0xf8623e12557cf059, 0xaa8ba1a909226434, 0x16d39c0ca805e1a5, 0xd6d78d75a18fbe28,
    0x7b94e67760b0348e, 0xe9ff1042944f95cc, 0xd524c2c2cbca526b, 0xc8ae6a061edca1da,
    0x019021be6204d3b0, 0xc1d679ea87f0d538, 0x73762463028d479d, 0x9969aa65e90aef40,
    0xc42f5dbd07bf6a68, 0xab20df832d9e3918, 0x95bc9336da1999da, 0xa2ae0f90d48eba71,
    0x19dde1b7fc28650e, 0x1042928e64d56bc6, 0x5eca1c76092e77a5, 0x3f7131a682c8a47a,
    0x7541a3b72a527e10, 0xa52943f075a77a84, 0xd8adfcd145e9a54c, 0x1b8af545438bfc13,
    0x030e7e716569fc06, 0x0c011a460379c9ea, 0xea6fc7d9c95a3bed, 0x54e4ffc3f05ea8e1,
    0xe3e7a95cce460f16, 0x7f0ea34cd7b47907, 0xc8ff61c4ec23cbe8, 0xaa78f5a50c6281bf,
    0xe10cc219a7ea6ff4, 0x5f0dc429d6582870, 0x7c027f2dee4d53fe, 0x18fcfcbfcde88a87,
    0x7f28b53c24fb79b1, 0x7ddbfbc1dcdc9eca, 0xbed28db75730727d, 0x044517798fca4b14,
    0x85b8e51003f7e74e, 0x40952b1dfbc64de4, 0x60c400c24ef25fd2, 0xb3330e7989996aa1,
    0xf31013dd144b5baa, 0xc3b7dfdfc5f8bdc2, 0x003e8690659fe0c8, 0x5b0bda8fc280d6fd,
    0xa8f3ee1c6b28c10e, 0xa8672f141ab284e5, 0x18c2118062f7ae43, 0x6c2f43528686b7f1,
    0xa69734a98e6032c2, 0x05b2b87527254b98, 0x6dc104f6b2608f2d, 0x592029c3f3931cd3,
    0x4f4705d168e08910, 0xa100dffba3d89a64, 0xc12fa263df0e007b, 0xeb384accba82588a,
    0x7202368562684395, 0x968ee374bf99d0db, 0xf1acc0b4705f6f2d, 0x0910d48cb79d85b5,
    0xd7385405784024a9, 0x80ce0552000b38eb, 0xb5532f316e8bb881, 0xae9c0a0335e8a499,
    0xae5d758a09a2cd6a, 0x38d3abcec95e6ccd, 0x2b771659c3fa5a55, 0x86341574e826c2a7,
    0x940047f7dd6cf55f, 0xc1eb956e23dad3f5, 0xe291c6696030fa20, 0x2ba18806337abcdf,
    0x27415648dfc84387, 0x52b5143e51e7baf0, 0x4511c71edd604bec, 0x566c48e0df87e117,
    0xee9912fd9f053b54, 0x6d29a8006a6c67e0, 0x15031e39b6517fb8, 0x6c3c58e8c55acdcf,
    0xf009855591c9ce45, 0x29f907abef22ad48, 0xe199582d8d9e2551, 0x2bb35895e8c30170,
    0x8d3367224e030f6f, 0x2cd1eee8d4a8d38b, 0x6bbdbbe2cb21320d, 0xbf616a637c89687f,
    0x5ba26c8433b69548, 0x55fe7ca290add7ff, 0x4d84839674eaf54d, 0x823da4e24d8ac331,
    0xe121603852cafe66, 0x78df276ed0667127, 0x5aecc725c353ded4, 0x86bbe89310c907ce,
    0x1a8285b94fef5f3f, 0x773326d238a9c4b7, 0x87b1bd19b413cd59, 0x0e8cd77118dea681,
    0x8b20a3541f94c8fe, 0x73928ed81552b6ca, 0xb691c368f042a858, 0x05ccc7ef86002187,
    0xcdc0723af3944ea1, 0x452bb26c3e416bf0, 0x53118e162a32c998, 0x95874a07d07a5df1,
    0xbbbc59d4d8bb168e, 0xce965310ae4960de, 0xcb31d999c1e7f393, 0x71c4d9f3a5f414db,
    0xfbc687dfe65c3bde, 0x5cc4855566cee7c8, 0x9e7d374726e6f0b2, 0xa08ce6db6e5a4697,
    0xc1d9b9864037406b, 0x22fda573bc1edbaf, 0x09baea0530ee07da, 0xf3988384bb13a04a,
    0xb7f89b1e95cff3f6, 0xab04144dc7a0b6b8, 0xbc23486bd0113218, 0x701f03667ffc238a,
    0x0c0cded947ec38da, 0x2214d7818d6fc220, 0x4e158c99d05f1ed9, 0xf6dad8298d30e337,
    0xcc2aac940fd29442, 0x9fa1047e6622787e, 0x37c6d002372c6953, 0x54ce04771d47602f,
    0x592691bd314ce92f, 0x9fbf6afc887a5d3a, 0xdf9ffa198e8b6004, 0x59fcae26bd06ccae,
    0xe1950478d2adeb41, 0x8625f0fd7b9e330e, 0x545b50f91e059641, 0xcf56c151c9e1cadf,
    0x317599344e3b048a, 0x7fc6cb4971fe5514, 0xeba11d8928606f86, 0xd2a07ffbcfcdbb3b,
    0xb8c712c13b5d3ef0, 0x81ecb497ba3489d6, 0x6112dfeddfe9804f, 0xc12740e317d283ba,
    0x9fe9273a7f1e0c84, 0x44095ed19fbd0dc0, 0xfffa2461a7b25225, 0x75117ec17e1c8d25,
    0x2bdf8f3fc137ee74, 0xa422990af02a93d6, 0xb8646da2dd05f87b, 0xca1ae8879625ebdd,
    0x4c122f37da995fa6, 0xdd91842800e8edf1, 0xde2fbef4759d1f21, 0x080113ce5ce7b1fe,
    0x466d68595ab65df8, 0x03e1c08598fe2bdf, 0x92f7ab80cac8a500, 0x7ed61f4dfc6b398f,
    0xa7be95a1786e211f, 0xde24434e36edccae, 0x49d0d12eb0ca876d, 0x8858f75ae20440c0,
    0xc9d0d4dd9898228e, 0x7d40df325c07d0e0, 0x0fbd4a1a8dda1c18, 0xa9f464d9976697a2,
    0x6d738d71bf7e0403, 0x2443800eb0967e1f, 0x519f8006e5b5fe71, 0xf7b9d2e8510fac71,
    0xfce3c5b3777d2647, 0xfb2662a3d515576f, 0x9f84abe86adabb43, 0xb1089d032704acff,
    0x5a514e5c01b4d54e, 0x6dcf9aaa7e11e723, 0x21bc10dcae142cd7, 0x75b7fe62c277ce6b,
    0x051b576523307ae1, 0x6253995c27cb51a9, 0x6a869959708fe84e, 0x75b89299e9b0f01e,
    0xad1f7c69dd6cf58e, 0x664313e2bf0b57d8, 0x474b791e7e7825e3, 0xf7c76c19bc0138fc,
    0x892b5688ca9adec0, 0x0eb2da9d85824996, 0xffb04bdccbd19acb, 0xaf24308543e07dc9,
    0x8fd3553d9a3e0906, 0x32c6cf780e08fe34, 0x0bc1f1bbe7845208, 0x3fd62c71d2b92017,
    0x77f59a47b1d79b65, 0xc9053751e777164b, 0xb95689151e90d1ea, 0x03e1475c94eb4c64,
    0x80a8b395df07e3b2, 0xc56ed47ad9ac5fa4, 0xf301e945d11753e5, 0x78f5d048965d0f66,
    0x06820a65a9e627f6, 0xaa847b833574596f, 0x640f9fcc5a648f86, 0xbce25d21def9997c,
    0x56bb57bc6a4c1977, 0x36a7aad1e5684d41, 0xe1a414f69c2a6ea4, 0x79e165c37bf9af9e,
    0x62158e7a42434b3d, 0xdb67c00c3b61a9f1, 0x0713558f8263018d, 0x25fc5873ea463b55,
    0x6b6dd1d24cc40ae0, 0x7a700b932056c1eb, 0x64f361f6b81cf160, 0xa5272cc3008e73a1,
    0xf9557a6afc3e98e6, 0x5fac5d8a7ca47b65, 0x940282639fc5238a, 0xfd85af98d86a04c5,
    0x61e3b35b98bccd61, 0x868babb14d32bb51, 0xa210e847a5a2359d, 0xfe138fae114310ce,
    0x2cc7dbd7c67f32a8, 0x9247303821e261c4, 0xe25b3209414ae48f, 0x4fe5beaf7daa60c1,
    0x0c43ef6ab7149afb, 0xa0af1ac6afe588ac, 0x6963492681f4597a, 0x96d93afde1fa4925,
    0xbefa8f7e71fdeb5a, 0x7b19cd7264bbbb09, 0xa89a3113c16a7dac, 0x1360da2d144e9768,
    0x84271786f2ae89b9, 0xc21d7d182b73b7b0, 0x54e9bcd1f34ddd48, 0x21c34a7bc45e4dc1,
    0xeb4c4ab3f7d24b89, 0x5c711f192e3713b0, 0x9dd6ba6071705037, 0x30f078c738e935c2,
    0xece5cc4ab951342b, 0x2c3284e332df8727, 0x83b7d3699bbb4a48, 0x1e01446a19226447,
    0xd806cd9c87406660, 0x60f4543e664fda59, 0xfea3c28eb3e3ee97, 0x49a6232a4a3cf0e7,
    0x27d40c78ac68a4c0, 0xe8bb010b07078003, 0xa18439d13dc17166, 0x979fa9b3d7f67ea9,
    0x873f3e6cae3831dc, 0x3cc6c0004e8d9032, 0x78cc4c784d2885a7, 0xc27e403541e744a1,
    0x6ccd0d70fbf0bc24, 0x34a7e67bf23af2c5, 0x93720f007beffe4c, 0x1bb2e8bcefee7cbf,
    0x18b058ba16aa346e, 0x813c9222fd75e96f, 0x998b96b7b4d5f9a3, 0x42119516ce293989,
    0xd99ca3e84d2ebab8, 0x75b5d044327f7614, 0x2be19efbfc119c63, 0xe45a357b1f7ac772,
    0xbfa3aa2b9eb88e48, 0x9b6f3d76b134b9e2, 0x1ca68cf4b908e4b1, 0xa785fa11b7596763,
    0x057375cdb8b5b56b, 0xb28268dd40ab102d, 0x9dc8220cbcb0a280, 0x95adbf89e5702478,
    0x8e24b7fb419fbed7, 0x5d06fce7e22401d3, 0xc1f6420439261215, 0xdd1a44010a0e3454,
    0x99c8e81f4b08565a, 0xcc36bf10ea939b7b, 0x57ebf90dc950b409, 0x4c1288dcb03c2113,
    0x5a4562d7d13bbad1, 0xb38f1af150a4380a, 0xb849e62b9edda2dd, 0xff4d07a27907a4fb,
    0x71e34a2b911d5141, 0xe3b6e095150b52d3, 0x539299fd468139e2, 0xfd9d673d5035e72e,
    0xdf17df65d1fc6d14, 0xecf3dc345de45795, 0x74a2811e707c5a84, 0x348143555ca9a7c0,
    0xd2ec77b4acd68ac9, 0x683fb954d893882d, 0xaca0f8321cbb0472, 0x0cae5613e5a0c388,
    0x20cc046cba4d8511, 0x77114b91aa21641b, 0x38284beab73f9170, 0xdbb4e97bfed93ff0,
    0x451a337a34751b79, 0x2c1c316b54f53396, 0x9dd964b8887b5537, 0xc2ac76412532d2fb,
    0x7ad8c5f15bf158a2, 0x9a527cfca09a397f, 0x8942b00274ffacdf, 0x4bf472a9ab98d1d0,
    0x0170de6edbe933d5, 0x76a58873311e1091, 0xaf1c2db86cfaf887, 0xd7a267043f512b11,
    0xa39b73309e4fcdbf, 0xc64568ee6113fa22, 0x63ad80b341055f43, 0x2b75592f3c73c9da,
    0xcccd9b6dca7a750c, 0xca87636d722045ee, 0xd5ac8b6efea05a80, 0xd5d4f591fbdbb74d,
    0x603e75780e162f94, 0xb0309edc79f49139, 0x86cbd8249b41429b, 0x757eeeead469a96f,
    0xe6aaa94f096d19dc, 0x5406a670c6dce572, 0xcbc19b53faf45981, 0x50b164172c680900,
    0xdc2a2a2acadb9a8e, 0xc1db4cd9e0b4a2d5, 0x0973b35a2f5eaaf0, 0x43fa8e73b2f27e68,
    0xa9c40910fbfa4bde, 0x9ebeaf26ba3e870c, 0x9ecde40c3247f052, 0x25e82668659bb791,
    0x7b86d1ad3af52e0f, 0x9676b2e6f56b4c41, 0x68412b102a28ecc5, 0xd9f56769483716df,
    0xaa381cd844c4355d, 0x850872aff7c200c3, 0xa59ccb23aef27aeb, 0xb7a645166b84cf12,
    0xf65701629ebe948b, 0x3870b1b2cfac492c, 0x21bc78c004404a7a, 0x8abfba1970149e4c,
    0xa7516fe5d36af786, 0x90f59cd7cf2c702d, 0xf24684940eda35d1, 0x745be8bec5fe8611,
    0xbac1de613725ca0f, 0xa92c4daf589b2367, 0x0378d6f45d18523d, 0x85e5f20a55e3d756,
    0x6204ab94324f9190, 0x0d4ae0907c5944a5, 0x3cb182df27e4b406, 0xf27db0c1785389aa,
    0x1e28925acf327d7b, 0x933f0308ee2a19a3, 0x735dca912ea06e00, 0x5a30352a69f0d371,
    0xcf7fbf0ff2b9425e, 0x10d9fef8a4b11b45, 0xf33f8ac46109356e, 0xd40ed2ce80b1e6c0,
    0xca9fa2e74e6326c1, 0x99a2d1bfe58453b8, 0x27ecdc7ba34c89e8, 0x95e7afac79db2b2f,
    0x20c695064e99431e, 0xa988f6ce11e508ce, 0x0e4403163d8b6b11, 0xc1059eb4aad29fae,
    0x00e47e9cb09a114e, 0x5fb2b0919d89f8a5, 0x32d754ba62b0c8c3, 0x387586102fa55071,
    0x551d24e285ee1111, 0xc5043b25c2e064a6, 0xb375377da00b381c, 0xaf7f76a866d1669d,
    0xf0bc78a89e1dd386, 0xc69a03a48ae5d9f5, 0xa09298de37a3cc21, 0x3f5b86a96ab6df34,
    0x387f829e10e71331, 0xa7139a5ca87464ff, 0x4dc24e51c6fbf29c, 0x4a93d6d27dc41ab2,
    0x96e01de387893d90, 0x2200963821d39eea, 0x5316453d780d6c36, 0xa271aebb411aadf4,
    0x1e7b816b745325aa, 0x4c0be96941216c27, 0xe8cd9928aaa0ba9d, 0x285a0a76f55da361,
    0xf392b0bea2b500d8, 0x36507075f3e1fcb1, 0x01222d936fc90abb, 0x7a063503aa74f6ef,
    0x65965d29eba724cb, 0x32e534309a7f55f0, 0x58850a32c45bf2f3, 0xf18d0e5ba19d897d,
    0xadbe473b2ca8cd27, 0x784b7c9c417ac01d, 0xc611e49ea1ce9840, 0xcefd3eb3ac59263f,
    0x54c1926bc9451a00, 0x80a06bfcd74698e8, 0x19afc607d52d5b82, 0xe9927206c825da1d,
    0x6cc6d72e843501b3, 0x30fcc46f081d7aab, 0xf5ecda11ec96fe5a, 0x55840d18c8c79fa9,
    0x4bc365bb600a903d, 0x4aa26629165a9e09, 0x907db17d79ca9f87, 0x09cec7918e8a543e,
    0x563aa9793bde22c7, 0x336225f1589065ca, 0x71f2c56c42a67946, 0x810995b76f3cce5b,
    0x97d595a10c3c70e4, 0xd3416e58d46ca4a0, 0x0a7a73cfccc50010, 0xf8b4cc704bd0fe1d,
    0x8d29310ce8713f57, 0x4493509cadfb5e20, 0xc4574bc209754154, 0x98d588fc081ae894,
    0xbfc33ab9624153f2, 0x22384446dc1982ef, 0xd0b7c1c50ffdada3, 0xbc0bf9ed8218c29e,
    0xa991da5a2f8bd570, 0xb7b5c6065a5e15da, 0x48230f1e8b331478, 0xc39e3de8d3370dfe,
    0xb077c21e8cb7224b, 0x340ec0ce3217b468, 0xacf7362630d6675b, 0x41722fc308077a0a,
    0xa919a65f21b27937, 0x1f965903bd1158d7, 0xdad960cead575c4d, 0x46e1d63ea6d1f38f,
    0xbe110d73459e12be, 0xf143889f101cddb5, 0xe6ef13626ad8959f, 0x3d260ef484ee5ef8,
    0xf1d6423fc857c979, 0xdb86a29cff7b8a5f, 0x8fab0a6e70045f61, 0xc0fc25d74baf9139,
    0x0a4705128917c804,
];
