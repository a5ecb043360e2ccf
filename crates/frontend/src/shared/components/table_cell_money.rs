use contracts::shared::money::format_brl_opt;
use leptos::prelude::*;
use thaw::*;

/// Table cell for BRL amounts: right-aligned, formatted with pt-BR
/// separators, `None` rendered as the "-" marker (e.g. the unrealized total
/// of a pending sale).
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Color positive amounts green and negative amounts red (profit column)
    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted = move || format_brl_opt(value.get());

    let cell_style = move || {
        let mut styles = Vec::new();

        if color_by_sign {
            if let Some(v) = value.get() {
                if v >= 0.0 {
                    styles.push("color: var(--color-success-700)");
                } else {
                    styles.push("color: var(--color-error-700)");
                }
            }
        }

        if bold {
            styles.push("font-weight: 600");
        }

        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted}</span>
        </TableCell>
    }
}
