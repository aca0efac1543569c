use yew::prelude::*;

use crate::content::FaqEntry;

/// Next open index after clicking `clicked`: opening one closes the other,
/// clicking the open one collapses it.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| (!props.entries.is_empty()).then_some(0));

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, index));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button class="faq-question" {onclick}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{ if is_open { "−" } else { "+" } }</span>
                        </button>
                        if is_open {
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(toggle_open(Some(0), 2), Some(2));
        assert_eq!(toggle_open(None, 1), Some(1));
    }

    #[test]
    fn clicking_open_item_collapses_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }
}
