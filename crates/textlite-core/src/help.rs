//! Static texts for the Help menu.

/// Help entries shown as plain info dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    About,
    License,
    Disclaimer,
    Copyright,
    Credits,
}

impl HelpTopic {
    pub const ALL: [HelpTopic; 5] = [
        HelpTopic::About,
        HelpTopic::License,
        HelpTopic::Disclaimer,
        HelpTopic::Copyright,
        HelpTopic::Credits,
    ];

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            HelpTopic::About => "About TextLite",
            HelpTopic::License => "License",
            HelpTopic::Disclaimer => "Disclaimer",
            HelpTopic::Copyright => "Copyright",
            HelpTopic::Credits => "Credits",
        }
    }

    /// Dialog body.
    pub fn body(&self) -> &'static str {
        match self {
            HelpTopic::About => concat!(
                "TextLite ",
                env!("CARGO_PKG_VERSION"),
                "\n\n",
                "A small plain-text editor.\n",
                "Open, edit and save UTF-8 text files with undo/redo, ",
                "a choice of font and color, zoom and a dark mode."
            ),
            HelpTopic::License => concat!(
                "TextLite is released under the MIT License.\n\n",
                "Permission is hereby granted, free of charge, to any person obtaining ",
                "a copy of this software to deal in the software without restriction, ",
                "subject to including the copyright notice and this permission notice ",
                "in all copies or substantial portions of the software."
            ),
            HelpTopic::Disclaimer => concat!(
                "THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, ",
                "EXPRESS OR IMPLIED. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY ",
                "CLAIM, DAMAGES OR OTHER LIABILITY ARISING FROM THE USE OF THE SOFTWARE.\n\n",
                "Keep backups of files you care about."
            ),
            HelpTopic::Copyright => "Copyright (c) TextLite Contributors.",
            HelpTopic::Credits => concat!(
                "Built with iced for the interface, rfd for native dialogs, ",
                "ropey for text storage and arboard for the clipboard.\n\n",
                "Thanks to everyone who reported bugs and sent patches."
            ),
        }
    }
}
