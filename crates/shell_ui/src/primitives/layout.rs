use super::*;

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster, vertically centred.
pub fn Cluster(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive grid.
///
/// `columns` applies at every width; `md_columns` and `md_template` take over from the medium
/// breakpoint up, with the template winning when both are set.
pub fn Grid(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] columns: GridColumns,
    #[prop(default = None)] md_columns: Option<GridColumns>,
    #[prop(default = None)] md_template: Option<GridTemplate>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-gap=gap.token()
            data-ui-columns=columns.token()
            data-ui-md-columns=md_columns.map(GridColumns::token)
            data-ui-md-template=md_template.map(GridTemplate::token)
        >
            {children()}
        </div>
    }
}
