//! Prompt fragment to English display title.
//!
//! Translation is table driven: a phrase table is tried first (substring
//! containment, first hit wins), then a token table is applied in order as
//! sequential substitutions. Both tables are ordered slices because earlier
//! rows shadow later ones.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-title matches, tried in order against the raw fragment.
pub const PHRASES: &[(&str, &str)] = &[
    ("银发蓝眼仙女", "Silver-Haired Blue-Eyed Fairy"),
    ("银发蓝眼男子", "Silver-Haired Blue-Eyed Man"),
    ("白发蓝眼战士", "White-Haired Blue-Eyed Warrior"),
    ("白发蓝眼动作", "White-Haired Blue-Eyed Action"),
    ("好莱坞白发蓝眼", "Hollywood White Hair, Blue Eyes"),
    ("银发精灵召唤仪式", "Silver-Haired Elf Summoning Ritual"),
    ("龙与决斗者", "Dragon and Duelist"),
    ("闪电中的骑士", "Knight in Lightning"),
    ("骑士与巨龙", "Knight and Great Dragon"),
    ("三头龙与闪电", "Three-Headed Dragon and Lightning"),
    ("闪电中的三头龙", "Three-Headed Dragon in Lightning"),
    ("闪电背景巨龙", "Dragon in Lightning Backdrop"),
    ("巨龙护卫少女", "Great Dragon Protecting a Girl"),
    ("银龙闪电背景", "Silver Dragon With Lightning Backdrop"),
    ("银龙星空咆哮", "Silver Dragon Roaring Under Stars"),
    ("银甲龙咆哮", "Armored Silver Dragon Roar"),
    ("银色龙之守护", "Silver Dragon Guardian"),
    ("银色巨龙降临", "Arrival of the Silver Great Dragon"),
    ("好莱坞龙之怒", "Hollywood Dragon's Wrath"),
    ("好莱坞龙之觉醒", "Hollywood Dragon Awakening"),
    ("好莱坞龙之崛起", "Hollywood Dragon Rising"),
    ("好莱坞龙之威", "Hollywood Dragon's Might"),
    ("好莱坞龙之霸气", "Hollywood Dragon Dominance"),
    ("好莱坞金属龙", "Hollywood Metal Dragon"),
    ("好莱坞金属飞龙", "Hollywood Metal Wyvern"),
    ("好莱坞梦幻巨龙", "Hollywood Dreamlike Great Dragon"),
    ("好莱坞科幻飞龙", "Hollywood Sci-Fi Wyvern"),
    ("好莱坞科幻巨龙", "Hollywood Sci-Fi Great Dragon"),
    ("好莱坞科幻场景", "Hollywood Sci-Fi Scene"),
    ("好莱坞星空洞穴", "Hollywood Starry Cave"),
    ("好莱坞拍摄场景", "Hollywood Live-Action Set"),
    ("好莱坞风格重现", "Hollywood Style Reenactment"),
    ("好莱坞风格拍摄", "Hollywood Style Shooting"),
    ("好莱坞风格银龙", "Hollywood Style Silver Dragon"),
    ("好莱坞风格幻想龙", "Hollywood Style Fantasy Dragon"),
    ("好莱坞风格巨龙", "Hollywood Style Great Dragon"),
    ("好莱坞风格龙形", "Hollywood Style Dragon Form"),
    ("好莱坞风格龙", "Hollywood Style Dragon"),
    ("好莱坞质感龙角色", "Hollywood Dragon Character Study"),
    ("好莱坞奇幻龙", "Hollywood Fantasy Dragon"),
    ("好莱坞奇幻生物", "Hollywood Fantasy Creature"),
    ("好莱坞场景重构", "Hollywood Scene Rebuild"),
    ("好莱坞风石碑", "Hollywood Stone Monolith"),
    ("好莱坞式真实再现", "Hollywood Realistic Reenactment"),
    ("好莱坞式真实场景", "Hollywood Real-World Scene"),
    ("好莱坞真实拍摄", "Hollywood Live-Action Shot"),
    ("真实好莱坞拍摄", "Real Hollywood Shooting"),
    ("好莱坞奇幻巨龙", "Hollywood Fantasy Dragon"),
    ("好莱坞巨龙对峙", "Epic Dragon Standoff"),
    ("好莱坞巨龙场景", "Hollywood Dragon Setpiece"),
    ("好莱坞英雄对决", "Hollywood Hero Duel"),
    ("好莱坞幻想场景", "Hollywood Fantasy Set"),
    ("好莱坞动作场景", "Hollywood Action Scene"),
    ("动作电影场景", "Action Movie Scene"),
    ("好莱坞风格特效", "Hollywood VFX Showcase"),
    ("好莱坞风格怪物", "Hollywood Creature Feature"),
    ("好莱坞风格龙景", "Hollywood Dragon Vista"),
    ("好莱坞风格龙舞", "Dragon Dance"),
    ("好莱坞风格角色", "Hollywood Character Study"),
    ("武术战士火焰力量", "Martial Warrior: Flame Power"),
    ("武术动作场景", "Martial Arts Action"),
    ("火焰武士对决", "Flame Warrior Duel"),
    ("勇者与火焰巨龙", "Hero vs. Flame Dragon"),
    ("神秘女性与龙", "Mystery Woman and Dragon"),
    ("冰龙喷射寒冰", "Ice Dragon Breath"),
];

/// Token substitutions, applied in order to the working string.
pub const TOKENS: &[(&str, &str)] = &[
    ("银发蓝眼", "Silver-Haired Blue-Eyed"),
    ("白发蓝眼", "White-Haired Blue-Eyed"),
    ("蓝眼", "Blue-Eyed"),
    ("银发", "Silver-Haired"),
    ("白发", "White-Haired"),
    ("精灵", "Elf"),
    ("仙女", "Fairy"),
    ("男子", "Man"),
    ("少女", "Girl"),
    ("骑士", "Knight"),
    ("决斗者", "Duelist"),
    ("三头龙", "Three-Headed Dragon"),
    ("银龙", "Silver Dragon"),
    ("银色", "Silver"),
    ("银甲", "Silver Armored"),
    ("金属", "Metal"),
    ("闪电", "Lightning"),
    ("喷火", "Fire Breath"),
    ("咆哮", "Roar"),
    ("守护", "Guardian"),
    ("降临", "Arrival"),
    ("觉醒", "Awakening"),
    ("崛起", "Rise"),
    ("之怒", "Wrath"),
    ("之威", "Might"),
    ("霸气", "Dominance"),
    ("星空", "Starry"),
    ("洞穴", "Cave"),
    ("石碑", "Monolith"),
    ("黄金之梦", "Golden Dream"),
    ("梦幻", "Dreamlike"),
    ("重构", "Rebuild"),
    ("科幻", "Sci-Fi"),
    ("飞龙", "Wyvern"),
    ("巨龙", "Great Dragon"),
    ("亚洲女战士", "Asian Female Warrior"),
    ("女战士", "Female Warrior"),
    ("好莱坞风格", "Hollywood Style"),
    ("好莱坞风", "Hollywood Style"),
    ("武器掌握者", "Weapon Wielder"),
    ("武器持握", "Weapon Grip"),
    ("持武器", "Holding Weapon"),
    ("好莱坞", "Hollywood"),
    ("风格", "Style"),
    ("风", "Style"),
    ("转换", "Transform"),
    ("肖像", "Portrait"),
    ("亚洲", "Asian"),
    ("奇幻", "Fantasy"),
    ("幻想", "Fantasy"),
    ("角色", "Character"),
    ("武器", "Weapon"),
    ("持握", "Grip"),
    ("掌握", "Mastery"),
    ("掌握者", "Wielder"),
    ("持", "Holding"),
    ("巨龙", "Great Dragon"),
    ("冰龙", "Ice Dragon"),
    ("火焰", "Flame"),
    ("寒冰", "Frost"),
    ("喷射", "Breath"),
    ("武术", "Martial Arts"),
    ("武士", "Warrior"),
    ("战士", "Warrior"),
    ("勇者", "Hero"),
    ("对决", "Duel"),
    ("对峙", "Standoff"),
    ("怪物", "Creature"),
    ("特效", "VFX"),
    ("场景", "Scene"),
    ("神秘", "Mystery"),
    ("女性", "Woman"),
    ("女", "Woman"),
    ("龙", "Dragon"),
];

/// Possessive particle with no English counterpart.
const FILLER: &str = "\u{7684}";

static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-]+").expect("Invalid regex"));
static RE_CJK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}]+").expect("Invalid regex"));
static RE_NON_LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]+").expect("Invalid regex"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

fn frame_label(hm: &str) -> String {
    if hm.is_empty() {
        "Frame".to_string()
    } else {
        format!("Frame {hm}")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes each word and drops a word equal (ignoring case) to the one
/// before it.
pub fn title_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for part in input.split_whitespace() {
        let word = capitalize(part);
        let repeated = words
            .last()
            .is_some_and(|last| last.to_lowercase() == word.to_lowercase());
        if repeated {
            continue;
        }
        words.push(word);
    }
    words.join(" ")
}

fn substitute_tokens(raw: &str) -> String {
    let mut built = raw.to_string();
    for (source, english) in TOKENS {
        if built.contains(*source) {
            built = built.replace(*source, &format!(" {english} "));
        }
    }
    built
}

fn clean(built: &str) -> String {
    let s = built.replace(FILLER, " ");
    let s = RE_SEPARATORS.replace_all(&s, " ");
    let s = RE_CJK.replace_all(&s, " ");
    let s = RE_NON_LATIN.replace_all(&s, " ");
    RE_WHITESPACE.replace_all(&s, " ").trim().to_string()
}

/// Derives a cased English title from a prompt fragment.
///
/// Never fails: fragments with nothing translatable become `"Frame <hm>"`
/// (or `"Frame"` when `hm` is empty).
pub fn english_title_from_prompt(prompt: &str, hm: &str) -> String {
    let raw = prompt.trim();
    if raw.is_empty() {
        return frame_label(hm);
    }

    if let Some((_, title)) = PHRASES.iter().find(|(source, _)| raw.contains(*source)) {
        return (*title).to_string();
    }

    let cleaned = clean(&substitute_tokens(raw));
    if cleaned.chars().any(|c| c.is_ascii_alphabetic()) {
        title_case(&cleaned)
    } else {
        frame_label(hm)
    }
}
