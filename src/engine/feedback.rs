//! Bilingual feedback messages.
//!
//! Rules carry stable message *keys*; the text lives here so the rule tables
//! stay enumerable and the engine stays deterministic. Messages may embed
//! `{name}` placeholders (the live value of a variable) and `{name:init}`
//! placeholders (the lesson's initial value, used when prompting for a value
//! pill that has not been stored yet). Rendering happens at display time
//! against whatever the store holds right then.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{Lang, Text, VarStore};

static MESSAGES: Lazy<HashMap<&'static str, Text>> = Lazy::new(|| {
    HashMap::from([
        // Shared
        ("common.complete", text!(en: "Amazing! Mission Complete!", cn: "太棒了！任务完成！")),
        ("common.mastered", text!(en: "Mastered!", cn: "掌握了！")),
        // Assignment
        (
            "assignment.intro",
            text!(en: "Hi! I'm Gulu. Let's learn about Boxes (Variables)!", cn: "你好！我是咕噜。我们来学习盒子（变量）！"),
        ),
        (
            "assignment.start",
            text!(en: "Let's ask the computer for two integer boxes: a and b.", cn: "我们向电脑要两个整数盒子：a 和 b。"),
        ),
        (
            "assignment.declared",
            text!(en: "We got boxes A and B! But they have random junk (?) inside. Clean A first!", cn: "我们领到了 A 和 B！但里面有随机垃圾 (?)。先清理 A！"),
        ),
        (
            "assignment.init_a",
            text!(en: "Great! A is now {a}. Now clean box B and put {b:init} in it!", cn: "棒！A 现在是 {a}。现在清理盒子 B 并放入 {b:init}！"),
        ),
        (
            "assignment.init_b",
            text!(en: "Both boxes are ready! Now, Copy 'a' into 'b' (b = a).", cn: "两个盒子都好了！现在，把 'a' 复制到 'b' (b = a)。"),
        ),
        // Swap
        ("swap.intro", text!(en: "Let's swap A and B. We need a helper box!", cn: "我们来交换 A 和 B。我们需要一个帮手盒子！")),
        ("swap.start", text!(en: "We have A and B. Get a helper!", cn: "我们有了 A 和 B。找个帮手！")),
        (
            "swap.temp_declared",
            text!(en: "We have 'temp'. Now, copy 'a' to 'temp' to save it!", cn: "有了 'temp'。现在把 'a' 复制到 'temp' 保存起来！"),
        ),
        (
            "swap.saved",
            text!(en: "Good! 'a' is safe in 'temp'. Now, move 'b' to 'a'.", cn: "很好！'a' 安全地待在 'temp' 里了。现在，把 'b' 移到 'a'。"),
        ),
        (
            "swap.moved",
            text!(en: "Great! 'a' has 'b's value. Finally, move 'temp' to 'b'!", cn: "棒！'a' 已经有了 'b' 的值。最后，把 'temp' 移回 'b'！"),
        ),
        // Find max
        ("find_max.intro", text!(en: "Who is the biggest? Let's find out!", cn: "谁是最大的？我们来找一找！")),
        ("find_max.start", text!(en: "We have A, B, C. We need a Max box.", cn: "我们有了 A, B, C。我们需要一个 Max 盒子。")),
        (
            "find_max.max_declared",
            text!(en: "Assume 'a' is the max initially. Drag 'a' to 'max'.", cn: "首先假设 'a' 是最大的。把 'a' 拖到 'max'。"),
        ),
        (
            "find_max.check_b",
            text!(en: "Next, compare b and max. Is b ({b}) > max ({max})?", cn: "接下来，比较 b 和 max。b ({b}) > max ({max}) 吗？"),
        ),
        ("find_max.b_bigger", text!(en: "Correct! B is bigger. Drag 'b' to 'max'.", cn: "正确！B 更大。把 'b' 拖到 'max'。")),
        ("find_max.b_not_bigger", text!(en: "Correct. Max stays the same.", cn: "正确。Max 保持不变。")),
        ("find_max.wrong_yes_b", text!(en: "Wrong. b is NOT bigger than max.", cn: "错误。b 并不比 max 大。")),
        ("find_max.wrong_no_b", text!(en: "Wrong. b IS bigger!", cn: "错了。b 确实比 max 大！")),
        (
            "find_max.check_c",
            text!(en: "Next, compare c and max. Is c ({c}) > max ({max})?", cn: "接下来，比较 c 和 max。c ({c}) > max ({max}) 吗？"),
        ),
        ("find_max.c_bigger", text!(en: "Correct! C is bigger. Drag 'c' to 'max'.", cn: "正确！C 更大。把 'c' 拖到 'max'。")),
        ("find_max.c_not_bigger", text!(en: "Correct. Max doesn't change.", cn: "正确。Max 不需要改变。")),
        ("find_max.wrong_yes_c", text!(en: "Wrong. c is NOT bigger than max.", cn: "错误。c 并不比 max 大。")),
        ("find_max.wrong_no_c", text!(en: "Wrong. c IS bigger!", cn: "错了。c 确实比 max 大！")),
        ("find_max.found", text!(en: "Found it! The max value is {max}.", cn: "找到了！最大值是 {max}。")),
        // Sort 3
        ("sort3.intro", text!(en: "Let's sort them from small to big!", cn: "我们要把它们从小到大排好队！")),
        ("sort3.check_ab", text!(en: "First, compare A and B. Is A > B?", cn: "首先，比较 A 和 B。A > B 吗？")),
        ("sort3.check_bc", text!(en: "Next, compare B and C. Is B > C?", cn: "接着，比较 B 和 C。B > C 吗？")),
        (
            "sort3.check_ab_again",
            text!(en: "Last check, A and B again. Is A > B?", cn: "最后检查，再次比较 A 和 B。A > B 吗？"),
        ),
        ("sort3.swapped", text!(en: "Swapped!", cn: "已交换！")),
        ("sort3.no_swap", text!(en: "Correct. Next...", cn: "正确。下一步...")),
        ("sort3.wrong_yes", text!(en: "Oops! No need to swap.", cn: "哎呀！不需要交换。")),
        ("sort3.wrong_no", text!(en: "Oops! Look closer.", cn: "哎呀！再看仔细点。")),
        ("sort3.sorted", text!(en: "Sorted! 1, 2, 3!", cn: "排好序了！")),
    ])
});

/// Raw bilingual text for a message key.
pub fn lookup(key: &str) -> Option<Text> {
    MESSAGES.get(key).copied()
}

/// Render a message key in `lang`, substituting `{name}` from the store and
/// `{name:init}` from the lesson's initial-value table. Unknown keys render
/// as the key itself so a missing entry is visible instead of silent.
pub fn render(key: &str, lang: Lang, store: &VarStore, initials: &[(&'static str, i64)]) -> String {
    let Some(text) = lookup(key) else {
        return key.to_string();
    };

    let template = text.get(lang);
    regex!(r"\{([a-z][a-z0-9_]*)(:init)?\}")
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            if caps.get(2).is_some() {
                initials
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, v)| v.to_string())
                    .unwrap_or_else(|| "?".to_string())
            } else {
                store.get(name).display()
            }
        })
        .into_owned()
}
