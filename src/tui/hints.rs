// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::prelude::*;

const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_SCORE_COLOR: Color = Color::White;

const HINTS: &[(&str, &str)] = &[
    ("↑↓←→", "move"),
    ("⏎", "pick/drop"),
    ("u", "undo"),
    ("r", "redo"),
    ("o", "optimize"),
    ("x", "reset"),
    ("s", "save"),
    ("L", "load"),
    ("i", "inspector"),
    ("q", "quit"),
];

pub(crate) fn footer_line(score: f64) -> Line<'static> {
    let mut spans = Vec::with_capacity(HINTS.len() * 3 + 1);
    for (key, label) in HINTS {
        spans.push(Span::styled(*key, Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("Score: {score:.2}"),
        Style::default().fg(FOOTER_SCORE_COLOR).add_modifier(Modifier::BOLD),
    ));
    Line::from(spans)
}
