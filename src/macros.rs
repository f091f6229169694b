#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! text {
    (en: $en:expr, cn: $cn:expr $(,)?) => {
        $crate::Text { en: $en, cn: $cn }
    };
}

#[macro_export]
macro_rules! drop_rule {
    (
        name: $name:expr,
        phase: $phase:expr,
        source: $source:expr,
        target: $target:expr,
        $(guard: $guard:expr,)?
        effects: [ $($eff:expr),* $(,)? ],
        next: $next:expr,
        feedback: $feedback:expr $(,)?
    ) => {
        $crate::DropRule {
            name: $name,
            phase: $phase,
            source: $source,
            target: $target,
            guard: {
                let g: $crate::Guard = |_| true;
                $(let g: $crate::Guard = $guard;)?
                g
            },
            effects: &[ $($eff),* ],
            next: $next,
            feedback: $feedback,
        }
    };
}

#[macro_export]
macro_rules! judgment {
    (
        name: $name:expr,
        phase: $phase:expr,
        truth: $truth:expr,
        yes: { $(effects: [ $($yeff:expr),* $(,)? ],)? next: $ynext:expr, feedback: $yfb:expr $(,)? },
        no: { $(effects: [ $($neff:expr),* $(,)? ],)? next: $nnext:expr, feedback: $nfb:expr $(,)? },
        wrong_yes: $wyes:expr,
        wrong_no: $wno:expr $(,)?
    ) => {
        $crate::JudgmentRule {
            name: $name,
            phase: $phase,
            truth: $truth,
            yes: $crate::Branch { effects: &[ $($($yeff),*)? ], next: $ynext, feedback: $yfb },
            no: $crate::Branch { effects: &[ $($($neff),*)? ], next: $nnext, feedback: $nfb },
            wrong_yes: $wyes,
            wrong_no: $wno,
        }
    };
}

#[macro_export]
macro_rules! advance {
    (
        name: $name:expr,
        phase: $phase:expr,
        $(effects: [ $($eff:expr),* $(,)? ],)?
        next: $next:expr,
        feedback: $feedback:expr $(,)?
    ) => {
        $crate::AdvanceRule {
            name: $name,
            phase: $phase,
            effects: &[ $($($eff),*)? ],
            next: $next,
            feedback: $feedback,
        }
    };
}
