//! Static catalog data.

use super::{SectionGroup, Testament};
use super::testament::Testament::{New, Old};

/// Number of Old Testament groups.
pub const OLD_TESTAMENT_GROUPS: usize = 39;
/// Number of New Testament groups.
pub const NEW_TESTAMENT_GROUPS: usize = 27;
/// Chapters in the Old Testament.
pub const OLD_TESTAMENT_CHAPTERS: u32 = 929;
/// Chapters in the New Testament.
pub const NEW_TESTAMENT_CHAPTERS: u32 = 260;

const fn group(
    code: &'static str,
    name: &'static str,
    abbreviation: &'static str,
    chapters: u32,
    testament: Testament,
    order: u32,
) -> SectionGroup {
    SectionGroup {
        code,
        name,
        abbreviation,
        chapters,
        testament,
        order,
    }
}

/// All 66 section groups in canonical order.
pub static CATALOG: &[SectionGroup] = &[
    // Old Testament
    group("gen", "창세기", "창", 50, Old, 1),
    group("exo", "출애굽기", "출", 40, Old, 2),
    group("lev", "레위기", "레", 27, Old, 3),
    group("num", "민수기", "민", 36, Old, 4),
    group("deu", "신명기", "신", 34, Old, 5),
    group("jos", "여호수아", "수", 24, Old, 6),
    group("jdg", "사사기", "삿", 21, Old, 7),
    group("rut", "룻기", "룻", 4, Old, 8),
    group("1sa", "사무엘상", "삼상", 31, Old, 9),
    group("2sa", "사무엘하", "삼하", 24, Old, 10),
    group("1ki", "열왕기상", "왕상", 22, Old, 11),
    group("2ki", "열왕기하", "왕하", 25, Old, 12),
    group("1ch", "역대상", "대상", 29, Old, 13),
    group("2ch", "역대하", "대하", 36, Old, 14),
    group("ezr", "에스라", "스", 10, Old, 15),
    group("neh", "느헤미야", "느", 13, Old, 16),
    group("est", "에스더", "에", 10, Old, 17),
    group("job", "욥기", "욥", 42, Old, 18),
    group("psa", "시편", "시", 150, Old, 19),
    group("pro", "잠언", "잠", 31, Old, 20),
    group("ecc", "전도서", "전", 12, Old, 21),
    group("sng", "아가", "아", 8, Old, 22),
    group("isa", "이사야", "사", 66, Old, 23),
    group("jer", "예레미야", "렘", 52, Old, 24),
    group("lam", "예레미야애가", "애", 5, Old, 25),
    group("ezk", "에스겔", "겔", 48, Old, 26),
    group("dan", "다니엘", "단", 12, Old, 27),
    group("hos", "호세아", "호", 14, Old, 28),
    group("jol", "요엘", "욜", 3, Old, 29),
    group("amo", "아모스", "암", 9, Old, 30),
    group("oba", "오바댜", "옵", 1, Old, 31),
    group("jon", "요나", "욘", 4, Old, 32),
    group("mic", "미가", "미", 7, Old, 33),
    group("nah", "나훔", "나", 3, Old, 34),
    group("hab", "하박국", "합", 3, Old, 35),
    group("zep", "스바냐", "습", 3, Old, 36),
    group("hag", "학개", "학", 2, Old, 37),
    group("zec", "스가랴", "슥", 14, Old, 38),
    group("mal", "말라기", "말", 4, Old, 39),
    // New Testament
    group("mat", "마태복음", "마", 28, New, 40),
    group("mrk", "마가복음", "막", 16, New, 41),
    group("luk", "누가복음", "눅", 24, New, 42),
    group("jhn", "요한복음", "요", 21, New, 43),
    group("act", "사도행전", "행", 28, New, 44),
    group("rom", "로마서", "롬", 16, New, 45),
    group("1co", "고린도전서", "고전", 16, New, 46),
    group("2co", "고린도후서", "고후", 13, New, 47),
    group("gal", "갈라디아서", "갈", 6, New, 48),
    group("eph", "에베소서", "엡", 6, New, 49),
    group("php", "빌립보서", "빌", 4, New, 50),
    group("col", "골로새서", "골", 4, New, 51),
    group("1th", "데살로니가전서", "살전", 5, New, 52),
    group("2th", "데살로니가후서", "살후", 3, New, 53),
    group("1ti", "디모데전서", "딤전", 6, New, 54),
    group("2ti", "디모데후서", "딤후", 4, New, 55),
    group("tit", "디도서", "딛", 3, New, 56),
    group("phm", "빌레몬서", "몬", 1, New, 57),
    group("heb", "히브리서", "히", 13, New, 58),
    group("jas", "야고보서", "약", 5, New, 59),
    group("1pe", "베드로전서", "벧전", 5, New, 60),
    group("2pe", "베드로후서", "벧후", 3, New, 61),
    group("1jn", "요한1서", "요일", 5, New, 62),
    group("2jn", "요한2서", "요이", 1, New, 63),
    group("3jn", "요한3서", "요삼", 1, New, 64),
    group("jud", "유다서", "유", 1, New, 65),
    group("rev", "요한계시록", "계", 22, New, 66),
];
