// Tableau palettes, as shipped with Tableau Desktop (Preferences.tps
// color and shape palettes).  Catalog order matters: qualitative
// palettes list their most distinct colors first.

use rgb::RGB8;

use super::ty::PaletteData;
use crate::marker::Marker::{self, *};

const fn rgb(hex: u32) -> RGB8 {
    RGB8 { r: (hex >> 16) as u8, g: (hex >> 8) as u8, b: hex as u8 }
}

macro_rules! palette {
    ($name: literal: $($c: literal),* $(,)?) => {
        PaletteData { name: $name, values: &[$(rgb($c)),*] }
    };
}

pub(crate) static REGULAR: &[PaletteData<RGB8>] = &[
    palette!("Tableau 10":
             0x4E79A7, 0xF28E2B, 0xE15759, 0x76B7B2, 0x59A14F,
             0xEDC948, 0xB07AA1, 0xFF9DA7, 0x9C755F, 0xBAB0AC),
    palette!("Tableau 20":
             0x4E79A7, 0xA0CBE8, 0xF28E2B, 0xFFBE7D, 0x59A14F,
             0x8CD17D, 0xB6992D, 0xF1CE63, 0x499894, 0x86BCB6,
             0xE15759, 0xFF9D9A, 0x79706E, 0xBAB0AC, 0xD37295,
             0xFABFD2, 0xB07AA1, 0xD4A6C8, 0x9D7660, 0xD7B5A6),
    palette!("Color Blind":
             0x1170AA, 0xFC7D0B, 0xA3ACB9, 0x57606C, 0x5FA2CE,
             0xC85200, 0x7B848F, 0xA3CCE9, 0xFFBC79, 0xC8D0D9),
    palette!("Seattle Grays":
             0x767F8B, 0xB3B7B8, 0x5C6068, 0xD3D3D3, 0x989CA3),
    palette!("Traffic":
             0xB60A1C, 0xE39802, 0x309143, 0xE03531, 0xF0BD27,
             0x51B364, 0xFF684C, 0xFFDA66, 0x8ACE7E),
    palette!("Miller Stone":
             0x4F6980, 0x849DB1, 0xA2CEAA, 0x638B66, 0xBFBB60,
             0xF47942, 0xFBB04E, 0xB66353, 0xD7CE9F, 0xB9AA97,
             0x7E756D),
    palette!("Superfishel Stone":
             0x6388B4, 0xFFAE34, 0xEF6F6A, 0x8CC2CA, 0x55AD89,
             0xC3BC3F, 0xBB7693, 0xBAA094, 0xA9B5AE, 0x767676),
    palette!("Nuriel Stone":
             0x8175AA, 0x6FB899, 0x31A1B3, 0xCCB22B, 0xA39FC9,
             0x94D0C0, 0x959C9E, 0x027B8E, 0x9F8F12),
    palette!("Jewel Bright":
             0xEB1E2C, 0xFD6F30, 0xF9A729, 0xF9D23C, 0x5FBB68,
             0x64CDCC, 0x91DCEA, 0xA4A4D5, 0xBBC9E5),
    palette!("Summer":
             0xBFB202, 0xB9CA5D, 0xCF3E53, 0xF1788D, 0x00A2B3,
             0x97CFD0, 0xF3A546, 0xF7C480),
    palette!("Winter":
             0x90728F, 0xB9A0B4, 0x9D983D, 0xCECB76, 0xE15759,
             0xFF9888, 0x6B6B6B, 0xBAB2AE, 0xAA8780, 0xDAB6AF),
    palette!("Green-Orange-Teal":
             0x4E9F50, 0x87D180, 0xEF8A0C, 0xFCC66D, 0x3CA8BC,
             0x98D9E4, 0x94A323, 0xC3CE3D, 0xA08400, 0xF7D42A,
             0x26897E, 0x8DBFA8),
    palette!("Red-Blue-Brown":
             0x466F9D, 0x91B3D7, 0xED444A, 0xFEB5A2, 0x9D7660,
             0xD7B5A6, 0x3896C4, 0xA0D4EE, 0xBA7E45, 0x39737C,
             0x86B4A9, 0x82853B, 0xCCC94D),
    palette!("Purple-Pink-Gray":
             0x8074A8, 0xC6C1F0, 0xC46487, 0xFFBED1, 0x9C9290,
             0xC5BFBE, 0x9B93C9, 0xDDB5D5, 0x7C7270, 0xF498B6,
             0xB173A0, 0xC799BC),
    palette!("Hue Circle":
             0x1BA3C6, 0x2CB5C0, 0x30BCAD, 0x21B087, 0x33A65C,
             0x57A337, 0xA2B627, 0xD5BB21, 0xF8B620, 0xF89217,
             0xF06719, 0xE03426, 0xF64971, 0xFC719E, 0xEB73B3,
             0xCE69BE, 0xA26DC2, 0x7873C0, 0x4F7CBA),
    palette!("Classic 10":
             0x1F77B4, 0xFF7F0E, 0x2CA02C, 0xD62728, 0x9467BD,
             0x8C564B, 0xE377C2, 0x7F7F7F, 0xBCBD22, 0x17BECF),
    palette!("Classic 10 Medium":
             0x729ECE, 0xFF9E4A, 0x67BF5C, 0xED665D, 0xAD8BC9,
             0xA8786E, 0xED97CA, 0xA2A2A2, 0xCDCC5D, 0x6DCCDA),
    palette!("Classic 10 Light":
             0xAEC7E8, 0xFFBB78, 0x98DF8A, 0xFF9896, 0xC5B0D5,
             0xC49C94, 0xF7B6D2, 0xC7C7C7, 0xDBDB8D, 0x9EDAE5),
    palette!("Classic 20":
             0x1F77B4, 0xAEC7E8, 0xFF7F0E, 0xFFBB78, 0x2CA02C,
             0x98DF8A, 0xD62728, 0xFF9896, 0x9467BD, 0xC5B0D5,
             0x8C564B, 0xC49C94, 0xE377C2, 0xF7B6D2, 0x7F7F7F,
             0xC7C7C7, 0xBCBD22, 0xDBDB8D, 0x17BECF, 0x9EDAE5),
    palette!("Classic Gray 5":
             0x60636A, 0xA5ACAF, 0x414451, 0x8F8782, 0xCFCFCF),
    palette!("Classic Color Blind":
             0x006BA4, 0xFF800E, 0xABABAB, 0x595959, 0x5F9ED1,
             0xC85200, 0x898989, 0xA2C8EC, 0xFFBC79, 0xCFCFCF),
    palette!("Classic Traffic Light":
             0xB10318, 0xDBA13A, 0x309343, 0xD82526, 0xFFC156,
             0x69B764, 0xF26C64, 0xFFDD71, 0x9FCD99),
    palette!("Classic Purple-Gray 6":
             0x7B66D2, 0xDC5FBD, 0x94917B, 0x995688, 0xD098EE,
             0xD7D5C5),
    palette!("Classic Purple-Gray 12":
             0x7B66D2, 0xA699E8, 0xDC5FBD, 0xFFC0DA, 0x5F5A41,
             0xB4B19B, 0x995688, 0xD898BA, 0xAB6AD5, 0xD098EE,
             0x8B7C6E, 0xDBD4C5),
    palette!("Classic Green-Orange 6":
             0x32A251, 0xFF7F0F, 0x3CB7CC, 0xFFD94A, 0x39737C,
             0xB85A0D),
    palette!("Classic Green-Orange 12":
             0x32A251, 0xACD98D, 0xFF7F0F, 0xFFB977, 0x3CB7CC,
             0x98D9E4, 0xB85A0D, 0xFFD94A, 0x39737C, 0x86B4A9,
             0x82853B, 0xCCC94D),
    palette!("Classic Blue-Red 6":
             0x2C69B0, 0xF02720, 0xAC613C, 0x6BA3D6, 0xEA6B73,
             0xE9C39B),
    palette!("Classic Blue-Red 12":
             0x2C69B0, 0xB5C8E2, 0xF02720, 0xFFB6B0, 0xAC613C,
             0xE9C39B, 0x6BA3D6, 0xB5DFFD, 0xAC8763, 0xDDC9B4,
             0xBD0A36, 0xF4737A),
    palette!("Classic Cyclic":
             0x1F83B4, 0x1696AC, 0x18A188, 0x29A03C, 0x54A338,
             0x82A93F, 0xADB828, 0xD8BD35, 0xFFBD4C, 0xFFB022,
             0xFF9C0E, 0xFF810E, 0xE75727, 0xD23E4E, 0xC94D8C,
             0xC04AA7, 0xB446B3, 0x9658B1, 0x8061B4, 0x6F63BB),
];

pub(crate) static ORDERED_SEQUENTIAL: &[PaletteData<RGB8>] = &[
    palette!("Blue":
             0xB9DDF1, 0xAFD6ED, 0xA5CFE9, 0x9BC7E4, 0x92C0DF,
             0x89B8DA, 0x80B0D5, 0x79AACF, 0x72A3C9, 0x6A9BC3,
             0x6394BE, 0x5B8CB8, 0x5485B2, 0x4E7FAC, 0x4878A6,
             0x4272A0, 0x3D6A98, 0x376491, 0x305D8A, 0x2A5783),
    palette!("Orange":
             0xFFC685, 0xFCBE75, 0xF9B665, 0xF7AE54, 0xF5A645,
             0xF59C3C, 0xF49234, 0xF2882D, 0xF07E27, 0xEE7422,
             0xEA6B1D, 0xE4631A, 0xDD5B18, 0xD65416, 0xCD4E15,
             0xC44814, 0xBA4213, 0xB03D13, 0xA73917, 0x9E3D22),
    palette!("Green":
             0xB3E0A6, 0xA5DB96, 0x98D687, 0x8ED07F, 0x85CA77,
             0x7DC370, 0x75BC69, 0x6EB663, 0x67AF5C, 0x61A956,
             0x59A253, 0x519C51, 0x49964F, 0x428F4D, 0x398949,
             0x308344, 0x2B7C40, 0x27763D, 0x256F3D, 0x24693D),
    palette!("Red":
             0xFFBEB2, 0xFEB4A6, 0xFDAB9B, 0xFCA290, 0xFB9984,
             0xFA8F79, 0xF9856E, 0xF77B66, 0xF5715D, 0xF36754,
             0xF05C4D, 0xEC5049, 0xE74545, 0xE13B42, 0xDA323F,
             0xD3293D, 0xCA223C, 0xC11A3B, 0xB8163A, 0xAE123A),
    palette!("Purple":
             0xEEC9E5, 0xEAC1DF, 0xE6B9D9, 0xE0B2D2, 0xDAABCB,
             0xD5A4C4, 0xCF9DBE, 0xCA96B8, 0xC48FB2, 0xBE89AC,
             0xB882A6, 0xB27BA1, 0xAA759D, 0xA27099, 0x9A6A96,
             0x926591, 0x8C5F8C, 0x865986, 0x81537F, 0x7C4D79),
    palette!("Brown":
             0xEEDBBD, 0xECD2AD, 0xEBC994, 0xEAC085, 0xE8B777,
             0xE5AE6C, 0xE2A562, 0xDE9D5A, 0xD99455, 0xD38C54,
             0xCE8451, 0xC9784D, 0xC47247, 0xC16941, 0xBD6036,
             0xB85636, 0xB34D34, 0xAD4433, 0xA63D32, 0x9F3632),
    palette!("Gray":
             0xD5D5D5, 0xCDCECD, 0xC5C7C6, 0xBCBFBE, 0xB4B7B6,
             0xACB0AF, 0xA4A9A8, 0x9CA19F, 0x959A98, 0x8D9391,
             0x868C8A, 0x7E8583, 0x777E7C, 0x6F7775, 0x687070,
             0x606967, 0x59625F, 0x525B58, 0x4B5450, 0x444D49),
    palette!("Gray Warm":
             0xDCD4D0, 0xD4CCC8, 0xCDC4C0, 0xC5BDB9, 0xBEB6B2,
             0xB7AFAB, 0xB0A7A4, 0xA9A09D, 0xA29996, 0x9B938F,
             0x948C88, 0x8D8582, 0x867E7B, 0x807774, 0x79706E,
             0x736967, 0x6C6260, 0x665C5A, 0x5F5654, 0x59504E),
    palette!("Blue-Teal":
             0xBCE4D8, 0xAEDCD5, 0xA1D5D2, 0x95CECF, 0x89C8CC,
             0x7EC1CA, 0x72BAC6, 0x66B2C2, 0x59ACBE, 0x4BA5BA,
             0x419EB6, 0x3B96B2, 0x358EAD, 0x3586A7, 0x347EA1,
             0x32779B, 0x316F96, 0x2F6790, 0x2D608A, 0x2C5985),
    palette!("Orange-Gold":
             0xF4D166, 0xF6C760, 0xF8BC58, 0xF8B252, 0xF7A84A,
             0xF69E41, 0xF49538, 0xF38B2F, 0xF28026, 0xF0751E,
             0xEB6C1C, 0xE4641E, 0xDE5D1F, 0xD75521, 0xCF4F22,
             0xC64A22, 0xBC4623, 0xB24223, 0xA83E24, 0x9E3A26),
    palette!("Green-Gold":
             0xF4D166, 0xE3CD62, 0xD3C95F, 0xC3C55D, 0xB2C25B,
             0xA3BD5A, 0x93B958, 0x84B457, 0x74AF56, 0x66AA55,
             0x5AA355, 0x4F9E53, 0x479751, 0x40914F, 0x3A8A4D,
             0x34844A, 0x2D7D45, 0x257740, 0x1C713B, 0x146C36),
    palette!("Red-Gold":
             0xF4D166, 0xF5C75F, 0xF6BC58, 0xF7B254, 0xF9A750,
             0xFA9D4F, 0xFA924E, 0xFA884D, 0xFA7E4C, 0xF9744B,
             0xF76A4A, 0xF4604A, 0xF0564A, 0xEC4D49, 0xE64547,
             0xDE3E45, 0xD53743, 0xCC3141, 0xC32B3F, 0xBA263D),
    palette!("Classic Green": 0xBCCFB4, 0x09622A),
    palette!("Classic Gray": 0xD5D5D5, 0x4F4F4F),
    palette!("Classic Blue": 0xB5C8E2, 0x2C69B0),
    palette!("Classic Red": 0xFFB6B0, 0xBD0A36),
    palette!("Classic Orange": 0xFFC685, 0xB85A0D),
];

pub(crate) static ORDERED_DIVERGING: &[PaletteData<RGB8>] = &[
    palette!("Orange-Blue Diverging":
             0x9E3D22, 0xD45B21, 0xF69035, 0xD9D5C9, 0x77ACD3,
             0x4F81AF, 0x2B5C8A),
    palette!("Red-Green Diverging":
             0xA3123A, 0xE33F43, 0xF8816B, 0xCED7C3, 0x73BA67,
             0x44914E, 0x24693D),
    palette!("Green-Blue Diverging":
             0x24693D, 0x45934D, 0x75BC69, 0xC9DAD2, 0x77A9CF,
             0x4E7FAB, 0x2A5783),
    palette!("Red-Blue Diverging":
             0xA90C38, 0xE03B42, 0xF87F69, 0xDFD4D1, 0x7EAED3,
             0x5383AF, 0x2E5A87),
    palette!("Red-Black Diverging":
             0xAE123A, 0xE33E43, 0xF8816B, 0xD9D9D9, 0xA0A7A8,
             0x707C83, 0x49525E),
    palette!("Gold-Purple Diverging":
             0xAD9024, 0xC1A33B, 0xD4B95E, 0xE3D8CF, 0xD4A3C3,
             0xC189B0, 0xAC7299),
    palette!("Red-Green-Gold Diverging":
             0xBE2A3E, 0xE25F48, 0xF88F4D, 0xF4D166, 0x90B960,
             0x4B9B5F, 0x22763F),
    palette!("Sunset-Sunrise Diverging":
             0x33608C, 0x9768A5, 0xE7718A, 0xF6BA57, 0xED7846,
             0xD54C45, 0xB81840),
    palette!("Orange-Blue-White Diverging":
             0x9E3D22, 0xE36621, 0xFCAD52, 0xFFFFFF, 0x95C5E1,
             0x5B8FBC, 0x2B5C8A),
    palette!("Red-Green-White Diverging":
             0xAE123A, 0xEE574D, 0xFDAC9E, 0xFFFFFF, 0x91D183,
             0x539E52, 0x24693D),
    palette!("Red-Blue-White Diverging":
             0xA90C38, 0xEC5A4F, 0xFDA6A0, 0xFFFFFF, 0x97C4E6,
             0x5B8FBE, 0x2E5A87),
    palette!("Temperature Diverging":
             0x529985, 0x6C9E6E, 0x99B059, 0xDBCF47, 0xEBC24B,
             0xE3A14F, 0xC26B51, 0xBE2A3E),
    palette!("Classic Red-Green": 0x9C0824, 0x09622A),
    palette!("Classic Red-Blue": 0x9C0824, 0x26456E),
    palette!("Classic Red-Black": 0x9C0824, 0x000000),
    palette!("Classic Red-White-Green": 0x9C0824, 0xFFFFFF, 0x09622A),
    palette!("Classic Red-White-Black": 0x9C0824, 0xFFFFFF, 0x000000),
    palette!("Classic Orange-White-Blue": 0xB85A0D, 0xFFFFFF, 0x26456E),
];

pub(crate) static SHAPES_DEFAULT: PaletteData<Marker> = PaletteData {
    name: "default",
    values: &[Circle, Square, Plus, Cross, Diamond, TriangleUp,
              TriangleDown, Asterisk, Star, Hexagon],
};

pub(crate) static SHAPES_FILLED: PaletteData<Marker> = PaletteData {
    name: "filled",
    values: &[FilledCircle, FilledSquare, FilledTriangleUp, FilledDiamond,
              FilledTriangleDown, FilledTriangleLeft, FilledTriangleRight,
              FilledStar],
};

pub(crate) static SHAPES_PROPORTIONS: PaletteData<Marker> = PaletteData {
    name: "proportions",
    values: &[Circle, CircleQuarter, CircleHalf, CircleThreeQuarters,
              FilledCircle],
};
