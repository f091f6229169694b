//! Static lesson content: titles, scenario inputs, code listings, presets,
//! vocabulary and quiz banks.
//!
//! Everything here is data. The interactive semantics live in `src/rules/`;
//! this module only describes what each lesson shows and which variables it
//! plays with.

use crate::{LessonId, Text};

/// One variable slot a lesson declares.
#[derive(Debug, Clone, Copy)]
pub struct VarSpec {
    pub name: &'static str,
    /// Seeded from the scenario inputs at load. Unseeded variables (`temp`,
    /// `max`, and the assignment lesson's boxes before their pills land)
    /// start as garbage.
    pub seeded: bool,
}

const fn seeded(name: &'static str) -> VarSpec {
    VarSpec { name, seeded: true }
}

const fn garbage(name: &'static str) -> VarSpec {
    VarSpec { name, seeded: false }
}

/// A named bundle of scenario inputs the learner can pick instead of typing
/// custom values.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub label: Text,
    pub values: &'static [(&'static str, i64)],
}

/// A vocabulary entry for the mastery drill. Common words recur in every
/// lesson; specific ones belong to this lesson alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub en: &'static str,
    pub cn: &'static str,
    pub common: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Given the English word, pick the Chinese meaning.
    MatchCn,
    /// Given the Chinese word, pick the English term.
    MatchEn,
    /// Fill the blank in a code fragment.
    FillCode,
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

/// Everything a frontend needs to present one lesson, minus the transition
/// semantics.
#[derive(Debug)]
pub struct LessonDef {
    pub id: LessonId,
    pub title: Text,
    pub description: Text,
    pub summary: Text,
    pub takeaways: &'static [Text],
    /// The short listing shown beside the canvas.
    pub code: &'static str,
    /// The complete compilable program for the "full code" view.
    pub full_code: &'static str,
    pub max_steps: u32,
    pub variables: &'static [VarSpec],
    /// Default scenario inputs. Also the source of value-pill literals.
    pub initial_values: &'static [(&'static str, i64)],
    pub presets: &'static [Preset],
    /// Lesson-specific vocabulary; `vocabulary` prepends the common words.
    pub words: &'static [Word],
    pub questions: &'static [Question],
}

impl LessonDef {
    /// Map a step index to the highlighted line of `code` (0 = no highlight
    /// past the header). The assignment listing has no "start" line, so its
    /// steps are shifted down by one.
    pub fn code_line(&self, step: u32) -> u32 {
        match self.id {
            LessonId::Assignment => {
                if step <= 1 {
                    0
                } else {
                    step - 1
                }
            }
            _ => step,
        }
    }
}

const fn word(en: &'static str, cn: &'static str) -> Word {
    Word { en, cn, common: false }
}

const COMMON_WORDS: &[Word] = &[
    Word { en: "Integer", cn: "整数", common: true },
    Word { en: "Variable", cn: "变量", common: true },
    Word { en: "Function", cn: "函数", common: true },
    Word { en: "Include", cn: "包含", common: true },
    Word { en: "Compile", cn: "编译", common: true },
];

/// The drill word list for a lesson: the five common words followed by the
/// lesson's own four.
pub(crate) fn vocabulary(id: LessonId) -> Vec<Word> {
    COMMON_WORDS.iter().chain(lesson(id).words).copied().collect()
}

static LESSONS: [LessonDef; 4] = [
    LessonDef {
        id: LessonId::Assignment,
        title: text!(en: "Basic Assignment", cn: "基础赋值 (b = a)"),
        description: text!(
            en: "Learn how to get boxes (Declare) and put things in them (Assign).",
            cn: "学习如何“领盒子”（声明）以及如何“放东西”（赋值）。"
        ),
        summary: text!(
            en: "Great job! You learned that new boxes are \"dirty\" (random junk inside) until you put a value in them.",
            cn: "做得好！你学会了新领的盒子里面是“脏”的（有垃圾值），直到你给它赋值为止。"
        ),
        takeaways: &[
            text!(en: "int a, b; Gets two boxes. They have random junk inside!", cn: "int a, b; 领了两个盒子。里面一开始装着随机的垃圾！"),
            text!(en: "a = 10; Cleans the box and puts 10 in it.", cn: "a = 10; 把盒子清理干净，放入 10。"),
            text!(en: "b = a; Copies the value from a to b.", cn: "b = a; 把 a 里的东西复印一份，放进 b 里。"),
        ],
        code: "int a, b;\na = 10;\nb = 20;\nb = a;",
        full_code: "#include <iostream>\nusing namespace std;\n\nint main() {\n    // 1. Get boxes (they contain garbage!)\n    int a, b;\n    \n    // 2. Clean and fill boxes\n    a = 10;\n    b = 20;\n    \n    // 3. Copy a to b\n    b = a; \n    \n    return 0;\n}",
        max_steps: 4,
        variables: &[garbage("a"), garbage("b")],
        initial_values: &[("a", 10), ("b", 20)],
        presets: &[
            Preset {
                label: text!(en: "Standard (10 -> 20)", cn: "标准 (10 -> 20)"),
                values: &[("a", 10), ("b", 20)],
            },
            Preset {
                label: text!(en: "Big Numbers", cn: "大数复制"),
                values: &[("a", 999), ("b", 0)],
            },
        ],
        words: &[
            word("Declare", "声明 (领盒子)"),
            word("Assign", "赋值 (放东西)"),
            word("Value", "数值 (里面的东东)"),
            word("Copy", "复制"),
        ],
        questions: &[
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Declare",
                options: &["声明", "销毁", "运行"],
                answer: "声明",
            },
            Question {
                kind: QuestionKind::MatchEn,
                prompt: "赋值",
                options: &["Assign", "Design", "Align"],
                answer: "Assign",
            },
            Question {
                kind: QuestionKind::FillCode,
                prompt: "____ a = 10; // 创建整数盒子",
                options: &["int", "box", "var"],
                answer: "int",
            },
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Value",
                options: &["数值", "阀门", "空间"],
                answer: "数值",
            },
        ],
    },
    LessonDef {
        id: LessonId::Swap,
        title: text!(en: "Swap Variables", cn: "交换变量"),
        description: text!(
            en: "Exchange the values of two variables using a temporary variable.",
            cn: "使用临时变量交换两个变量的值。"
        ),
        summary: text!(
            en: "You mastered the Swap! Remember, computers need a third \"temp\" box to switch two values safely.",
            cn: "你掌握了交换！记住，电脑需要第三个 \"temp\" 盒子才能安全地交换两个数值。"
        ),
        takeaways: &[
            text!(en: "You cannot just swap hands like humans.", cn: "电脑不能像人一样直接左右手互换。"),
            text!(en: "Step 1: Save \"a\" to \"temp\".", cn: "第一步：先把 \"a\" 存到 \"temp\"。"),
            text!(en: "Step 2: Overwrite \"a\" with \"b\".", cn: "第二步：用 \"b\" 覆盖 \"a\"。"),
            text!(en: "Step 3: Restore \"temp\" to \"b\".", cn: "第三步：把 \"temp\" 拿给 \"b\"。"),
        ],
        code: "void swap(int& a, int& b) {\n    int temp = a;\n    a = b;\n    b = temp;\n}",
        full_code: "#include <iostream>\nusing namespace std;\n\nvoid swap(int& a, int& b) {\n    int temp = a;\n    a = b;\n    b = temp;\n}\n\nint main() {\n    int a = 10;\n    int b = 20;\n    swap(a, b);\n    return 0;\n}",
        max_steps: 4,
        variables: &[seeded("a"), seeded("b"), garbage("temp")],
        initial_values: &[("a", 10), ("b", 20)],
        presets: &[
            Preset {
                label: text!(en: "Standard (10, 20)", cn: "标准 (10, 20)"),
                values: &[("a", 10), ("b", 20)],
            },
            Preset {
                label: text!(en: "Large Values", cn: "大数值"),
                values: &[("a", 99), ("b", 1000)],
            },
            Preset {
                label: text!(en: "Negative", cn: "负数"),
                values: &[("a", -5), ("b", 5)],
            },
        ],
        words: &[
            word("Swap", "交换"),
            word("Temporary", "临时的"),
            word("Exchange", "互换"),
            word("Safety", "安全"),
        ],
        questions: &[
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Temporary",
                options: &["临时的", "永久的", "快速的"],
                answer: "临时的",
            },
            Question {
                kind: QuestionKind::FillCode,
                prompt: "int ____ = a; // Save a",
                options: &["temp", "dump", "lamp"],
                answer: "temp",
            },
            Question {
                kind: QuestionKind::MatchEn,
                prompt: "交换",
                options: &["Swap", "Sweep", "Stop"],
                answer: "Swap",
            },
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Integer",
                options: &["整数", "网络", "积分"],
                answer: "整数",
            },
        ],
    },
    LessonDef {
        id: LessonId::FindMax,
        title: text!(en: "Find Max of 3", cn: "寻找最大值 (3个数)"),
        description: text!(
            en: "Determine the largest value among three variables.",
            cn: "找出三个变量中的最大值。"
        ),
        summary: text!(
            en: "Excellent! Finding the max is just like a \"King of the Hill\" game. The winner stays in the \"max\" box.",
            cn: "太棒了！找最大值就像“擂台赛”。赢家留在 \"max\" 盒子里，输家就被淘汰。"
        ),
        takeaways: &[
            text!(en: "Assume the first one is the winner (max = a).", cn: "先假设第一个就是冠军 (max = a)。"),
            text!(en: "Challenge with the next one. If bigger, update max.", cn: "下一个来挑战。如果更大，就更新 max。"),
            text!(en: "Repeat until everyone has challenged.", cn: "一直比到最后，剩下的就是最大值。"),
        ],
        code: "int maxOf3(int a, int b, int c) {\n    int max = a;\n    if (b > max) max = b;\n    if (c > max) max = c;\n    return max;\n}",
        full_code: "#include <iostream>\nusing namespace std;\n\nint maxOf3(int a, int b, int c) {\n    int max = a;\n    if (b > max) max = b;\n    if (c > max) max = c;\n    return max;\n}\n\nint main() {\n    int a = 10, b = 30, c = 20;\n    int result = maxOf3(a, b, c);\n    return 0;\n}",
        max_steps: 5,
        variables: &[seeded("a"), seeded("b"), seeded("c"), garbage("max")],
        initial_values: &[("a", 10), ("b", 30), ("c", 20)],
        presets: &[
            Preset {
                label: text!(en: "Max is B (10, 30, 20)", cn: "最大值是 B (10, 30, 20)"),
                values: &[("a", 10), ("b", 30), ("c", 20)],
            },
            Preset {
                label: text!(en: "Max is A (50, 10, 20)", cn: "最大值是 A (50, 10, 20)"),
                values: &[("a", 50), ("b", 10), ("c", 20)],
            },
            Preset {
                label: text!(en: "Max is C (10, 20, 90)", cn: "最大值是 C (10, 20, 90)"),
                values: &[("a", 10), ("b", 20), ("c", 90)],
            },
            Preset {
                label: text!(en: "All Equal", cn: "全部相等"),
                values: &[("a", 15), ("b", 15), ("c", 15)],
            },
        ],
        words: &[
            word("Maximum", "最大值"),
            word("Compare", "比较"),
            word("Condition", "条件"),
            word("Result", "结果"),
        ],
        questions: &[
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Maximum",
                options: &["最大值", "最小值", "平均值"],
                answer: "最大值",
            },
            Question {
                kind: QuestionKind::FillCode,
                prompt: "___ (b > max)",
                options: &["if", "is", "in"],
                answer: "if",
            },
            Question {
                kind: QuestionKind::MatchEn,
                prompt: "比较",
                options: &["Compare", "Compile", "Complete"],
                answer: "Compare",
            },
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Condition",
                options: &["条件", "空调", "传统"],
                answer: "条件",
            },
        ],
    },
    LessonDef {
        id: LessonId::Sort3,
        title: text!(en: "Sort 3 Variables", cn: "排序 (3个数)"),
        description: text!(
            en: "Sort three variables in ascending order using swaps.",
            cn: "使用交换将三个变量按升序排序。"
        ),
        summary: text!(
            en: "You did it! Sorting is just comparing neighbors and swapping them if they are in the wrong order.",
            cn: "成功了！排序就是比较相邻的两个数，如果顺序不对（左边比右边大），就交换它们。"
        ),
        takeaways: &[
            text!(en: "Order Matters: We want Small -> Medium -> Large.", cn: "顺序很重要：我们要 小 -> 中 -> 大。"),
            text!(en: "Compare A & B. Swap if A > B.", cn: "先比 A 和 B。如果 A 大，就交换。"),
            text!(en: "Compare B & C. Swap if B > C.", cn: "再比 B 和 C。如果 B 大，就交换。"),
            text!(en: "Check A & B one last time!", cn: "最后再检查一遍 A 和 B！"),
        ],
        code: "void sort3(int& a, int& b, int& c) {\n    if (a > b) std::swap(a, b);\n    if (b > c) std::swap(b, c);\n    if (a > b) std::swap(a, b);\n}",
        full_code: "#include <iostream>\n#include <algorithm> // for std::swap\nusing namespace std;\n\nvoid sort3(int& a, int& b, int& c) {\n    if (a > b) std::swap(a, b);\n    if (b > c) std::swap(b, c);\n    if (a > b) std::swap(a, b);\n}\n\nint main() {\n    int a = 30, b = 10, c = 20;\n    sort3(a, b, c);\n    return 0;\n}",
        max_steps: 3,
        variables: &[seeded("a"), seeded("b"), seeded("c")],
        initial_values: &[("a", 30), ("b", 10), ("c", 20)],
        presets: &[
            Preset {
                label: text!(en: "Reverse (3, 2, 1)", cn: "逆序 (3, 2, 1)"),
                values: &[("a", 30), ("b", 20), ("c", 10)],
            },
            Preset {
                label: text!(en: "Sorted (1, 2, 3)", cn: "已排序 (1, 2, 3)"),
                values: &[("a", 10), ("b", 20), ("c", 30)],
            },
            Preset {
                label: text!(en: "Mixed (3, 1, 2)", cn: "乱序 (3, 1, 2)"),
                values: &[("a", 30), ("b", 10), ("c", 20)],
            },
            Preset {
                label: text!(en: "Mixed (1, 3, 2)", cn: "乱序 (1, 3, 2)"),
                values: &[("a", 10), ("b", 30), ("c", 20)],
            },
            Preset {
                label: text!(en: "Mixed (2, 3, 1)", cn: "乱序 (2, 3, 1)"),
                values: &[("a", 20), ("b", 30), ("c", 10)],
            },
        ],
        words: &[
            word("Sort", "排序"),
            word("Order", "顺序"),
            word("Ascending", "升序 (从小到大)"),
            word("Algorithm", "算法"),
        ],
        questions: &[
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Order",
                options: &["顺序", "点餐", "命令"],
                answer: "顺序",
            },
            Question {
                kind: QuestionKind::MatchEn,
                prompt: "升序",
                options: &["Ascending", "Descending", "Pending"],
                answer: "Ascending",
            },
            Question {
                kind: QuestionKind::FillCode,
                prompt: "std::____(a, b); // Exchange",
                options: &["swap", "sort", "switch"],
                answer: "swap",
            },
            Question {
                kind: QuestionKind::MatchCn,
                prompt: "Algorithm",
                options: &["算法", "算术", "节奏"],
                answer: "算法",
            },
        ],
    },
];

/// All lesson definitions in presentation order.
pub(crate) fn all() -> &'static [LessonDef] {
    &LESSONS
}

/// The definition for one lesson.
pub(crate) fn lesson(id: LessonId) -> &'static LessonDef {
    LESSONS.iter().find(|l| l.id == id).unwrap_or(&LESSONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_variables_all_have_initial_values() {
        for def in all() {
            for var in def.variables {
                if var.seeded {
                    assert!(
                        def.initial_values.iter().any(|(n, _)| *n == var.name),
                        "{:?}: '{}' seeded but has no initial value",
                        def.id,
                        var.name
                    );
                }
            }
        }
    }

    #[test]
    fn presets_cover_exactly_the_initial_value_names() {
        for def in all() {
            for preset in def.presets {
                assert_eq!(preset.values.len(), def.initial_values.len(), "{:?}", def.id);
                for (name, _) in preset.values {
                    assert!(
                        def.initial_values.iter().any(|(n, _)| n == name),
                        "{:?}: preset names unknown variable '{name}'",
                        def.id
                    );
                }
            }
        }
    }

    #[test]
    fn quiz_answers_are_always_offered() {
        for def in all() {
            for q in def.questions {
                assert!(q.options.contains(&q.answer), "{:?}: '{}'", def.id, q.prompt);
            }
        }
    }

    #[test]
    fn vocabulary_prepends_the_common_words() {
        let words = vocabulary(LessonId::Swap);
        assert_eq!(words.len(), 9);
        assert!(words[..5].iter().all(|w| w.common));
        assert!(words[5..].iter().all(|w| !w.common));
        assert_eq!(words[5].en, "Swap");
    }

    #[test]
    fn assignment_code_lines_are_shifted_past_the_header() {
        let def = lesson(LessonId::Assignment);
        assert_eq!(def.code_line(0), 0);
        assert_eq!(def.code_line(1), 0);
        assert_eq!(def.code_line(2), 1);
        assert_eq!(def.code_line(4), 3);

        let sort = lesson(LessonId::Sort3);
        assert_eq!(sort.code_line(0), 0);
        assert_eq!(sort.code_line(2), 2);
    }
}
