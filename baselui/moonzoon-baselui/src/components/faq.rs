// FAQ section: a titled accordion of questions.

use crate::components::accordion::{accordion, AccordionItem};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Debug)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

pub struct FaqBuilder {
    title: String,
    entries: Vec<FaqEntry>,
}

impl FaqBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = FaqEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn build(self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_24))
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_24)
                        .weight(FontWeight::Number(FONT_WEIGHT_9))
                        .color_signal(neutral_12()))
                    .child(Text::new(self.title)),
            )
            .item(
                accordion()
                    .items(
                        self.entries
                            .into_iter()
                            .map(|entry| AccordionItem::new(entry.question, entry.answer)),
                    )
                    .build(),
            )
    }
}

pub fn faq(title: impl Into<String>) -> FaqBuilder {
    FaqBuilder::new(title)
}
