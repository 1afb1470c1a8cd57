use yew::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use crate::types::{Comment, DesignElement, ElementKind, Point, Tool};
use crate::utils::client_to_canvas_coords;
use crate::viewport::Viewport;

const HANDLE_SIZE: f64 = 8.0;

/// What a click on the empty surface does, as decided by the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceClick {
    PlaceComment,
    ClearSelection,
}

fn background_click_action(tool: Tool) -> SurfaceClick {
    if tool == Tool::Comment {
        SurfaceClick::PlaceComment
    } else {
        SurfaceClick::ClearSelection
    }
}

fn element_click_selects(tool: Tool) -> bool {
    tool == Tool::Select
}

#[derive(Properties, PartialEq)]
pub struct DesignCanvasProps {
    pub elements: Vec<DesignElement>,
    pub comments: Vec<Comment>,
    pub selected: Option<DesignElement>,
    pub tool: Tool,
    pub on_element_select: Callback<Option<DesignElement>>,
    pub on_comment_add: Callback<Point>,
    pub on_tool_change: Callback<Tool>,
}

/// The drawing surface: renders the design-space scene under the current
/// zoom/pan transform and routes pointer input to either element selection
/// or comment placement.
#[function_component(DesignCanvas)]
pub fn design_canvas(props: &DesignCanvasProps) -> Html {
    let viewport = use_state(Viewport::new);
    let canvas_ref = use_node_ref();

    let vp = *viewport;

    let on_zoom_in = {
        let viewport = viewport.clone();
        Callback::from(move |_: MouseEvent| {
            let mut vp = *viewport;
            vp.zoom_in();
            viewport.set(vp);
        })
    };

    let on_zoom_out = {
        let viewport = viewport.clone();
        Callback::from(move |_: MouseEvent| {
            let mut vp = *viewport;
            vp.zoom_out();
            viewport.set(vp);
        })
    };

    let on_reset_view = {
        let viewport = viewport.clone();
        Callback::from(move |_: MouseEvent| {
            let mut vp = *viewport;
            vp.reset();
            viewport.set(vp);
        })
    };

    // Background click: place a comment when the comment tool is active,
    // otherwise clear the selection. Element clicks stop propagation so they
    // never reach this handler.
    let on_canvas_click = {
        let canvas_ref = canvas_ref.clone();
        let tool = props.tool;
        let on_comment_add = props.on_comment_add.clone();
        let on_element_select = props.on_element_select.clone();
        Callback::from(move |e: MouseEvent| match background_click_action(tool) {
            SurfaceClick::PlaceComment => {
                if let Some(canvas) = canvas_ref.cast::<HtmlElement>() {
                    let click = client_to_canvas_coords(&e, &canvas);
                    on_comment_add.emit(vp.to_design(click));
                }
            }
            SurfaceClick::ClearSelection => on_element_select.emit(None),
        })
    };

    let rendered_elements = props
        .elements
        .iter()
        .map(|element| render_element(element, &vp, props))
        .collect::<Html>();

    let rendered_pins = props
        .comments
        .iter()
        .enumerate()
        .map(|(idx, comment)| render_comment_pin(idx, comment, &vp))
        .collect::<Html>();

    let toolbar_buttons = Tool::CANVAS_TOOLBAR
        .iter()
        .map(|&t| {
            let on_tool_change = props.on_tool_change.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_tool_change.emit(t));
            html! {
                <button
                    key={t.label()}
                    title={t.label()}
                    {onclick}
                    class={classes!(
                        "p-2", "rounded", "text-sm",
                        if props.tool == t { "bg-violet-600 text-white" } else { "hover:bg-gray-100" }
                    )}
                >
                    {t.icon()}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="relative w-full h-full bg-gray-50 rounded-lg overflow-hidden">
            // Toolbar
            <div class="absolute top-4 left-4 z-30 flex items-center space-x-1 bg-white/80 backdrop-blur rounded-lg p-2 shadow">
                {toolbar_buttons}
            </div>

            // Zoom controls
            <div class="absolute top-4 right-4 z-30 flex items-center space-x-2 bg-white/80 backdrop-blur rounded-lg p-2 shadow">
                <button onclick={on_zoom_out} class="p-1 rounded hover:bg-gray-100" title="Zoom out">{"\u{2212}"}</button>
                <span class="text-sm font-medium min-w-[3rem] text-center">{format!("{}%", vp.zoom)}</span>
                <button onclick={on_zoom_in} class="p-1 rounded hover:bg-gray-100" title="Zoom in">{"+"}</button>
                <button onclick={on_reset_view} class="p-1 rounded hover:bg-gray-100" title="Reset view">{"\u{27f2}"}</button>
            </div>

            // Surface
            <div
                ref={canvas_ref}
                data-testid="design-canvas"
                class="w-full h-full relative cursor-crosshair"
                style={format!(
                    "background-image: radial-gradient(circle, #e5e7eb 1px, transparent 1px); \
                     background-size: 20px 20px; background-position: {}px {}px;",
                    vp.pan.x, vp.pan.y
                )}
                onclick={on_canvas_click}
            >
                {rendered_elements}
                {rendered_pins}
                { render_selection_overlay(props.selected.as_ref(), &vp) }
            </div>
        </div>
    }
}

fn render_element(element: &DesignElement, vp: &Viewport, props: &DesignCanvasProps) -> Html {
    let screen = vp.to_screen(element.position);
    let is_selected = props
        .selected
        .as_ref()
        .is_some_and(|s| s.id == element.id);

    let onclick = {
        let element = element.clone();
        let tool = props.tool;
        let on_element_select = props.on_element_select.clone();
        Callback::from(move |e: MouseEvent| {
            // Must not also trigger the surface's deselect handler.
            e.stop_propagation();
            if element_click_selects(tool) {
                on_element_select.emit(Some(element.clone()));
            }
        })
    };

    // Position is transformed per the viewport contract; width/height stay in
    // design units and the CSS scale brings the box (and its text) to size.
    let outer_style = format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
         transform: scale({}); transform-origin: top left; cursor: {};",
        screen.x,
        screen.y,
        element.size.width,
        element.size.height,
        vp.scale(),
        if props.tool == Tool::Select { "pointer" } else { "default" },
    );

    let body = match &element.kind {
        ElementKind::Rectangle(style) => html! {
            <div
                class="w-full h-full flex items-center justify-center text-white font-medium"
                style={format!(
                    "background-color: {}; border-radius: {}px; font-size: {}px; \
                     font-family: {}; opacity: {};",
                    style.fill, style.border_radius, style.font_size, style.font_family, style.opacity
                )}
            >
                { style.label.clone().unwrap_or_default() }
            </div>
        },
        ElementKind::Circle(style) => {
            let border = style
                .stroke
                .as_ref()
                .map(|color| format!("border: 2px solid {color};"))
                .unwrap_or_default();
            html! {
                <div
                    class="w-full h-full rounded-full"
                    style={format!("background-color: {}; opacity: {}; {}", style.fill, style.opacity, border)}
                />
            }
        }
        ElementKind::Text(style) => html! {
            <div
                style={format!(
                    "color: {}; font-size: {}px; font-family: {}; opacity: {}; line-height: 1.5;",
                    style.color, style.font_size, style.font_family, style.opacity
                )}
            >
                { &style.content }
            </div>
        },
        ElementKind::Image => html! {
            <div class="w-full h-full bg-gray-200 rounded-lg flex items-center justify-center">
                <span class="text-2xl text-gray-400">{"\u{1f5bc}"}</span>
            </div>
        },
    };

    html! {
        <div
            key={element.id.clone()}
            class={classes!(
                "border-2",
                if is_selected { "border-violet-500 border-dashed" } else { "border-transparent" }
            )}
            style={outer_style}
            {onclick}
        >
            {body}
        </div>
    }
}

/// Numbered pin at the comment's design position. Numbering is positional
/// (index + 1 in the supplied sequence).
fn render_comment_pin(idx: usize, comment: &Comment, vp: &Viewport) -> Html {
    let screen = vp.to_screen(comment.position);
    let badge_class = if comment.resolved {
        "bg-gray-200 text-gray-700"
    } else {
        "bg-red-500 text-white"
    };

    html! {
        <div
            key={comment.id.clone()}
            class="absolute z-20"
            style={format!(
                "left: {}px; top: {}px; transform: scale({}); transform-origin: top left;",
                screen.x, screen.y, vp.pin_scale()
            )}
        >
            <div class="relative">
                <span class={classes!(
                    "inline-block", "px-2", "py-0.5", "rounded-full", "text-xs",
                    "font-semibold", "cursor-pointer", badge_class,
                    (!comment.resolved).then_some("animate-pulse")
                )}>
                    { idx + 1 }
                </span>
                if !comment.resolved {
                    <div class="absolute -inset-1 bg-red-500/20 rounded-full animate-ping" />
                }
            </div>
        </div>
    }
}

/// Dashed outline plus fixed-size corner handles around the selected element.
fn render_selection_overlay(selected: Option<&DesignElement>, vp: &Viewport) -> Html {
    let Some(element) = selected else {
        return html! {};
    };

    let screen = vp.to_screen(element.position);
    let width = element.size.width * vp.scale();
    let height = element.size.height * vp.scale();

    let handle = |left: f64, top: f64| {
        html! {
            <div
                class="absolute bg-violet-500 border border-white rounded-sm"
                style={format!(
                    "left: {}px; top: {}px; width: {HANDLE_SIZE}px; height: {HANDLE_SIZE}px;",
                    left - HANDLE_SIZE / 2.0,
                    top - HANDLE_SIZE / 2.0
                )}
            />
        }
    };

    html! {
        <div
            class="absolute border-2 border-violet-500 border-dashed pointer-events-none z-10"
            style={format!(
                "left: {}px; top: {}px; width: {}px; height: {}px;",
                screen.x, screen.y, width, height
            )}
        >
            { handle(0.0, 0.0) }
            { handle(width, 0.0) }
            { handle(0.0, height) }
            { handle(width, height) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_tool_places_a_comment_on_background_click() {
        assert_eq!(
            background_click_action(Tool::Comment),
            SurfaceClick::PlaceComment
        );
    }

    #[test]
    fn background_click_with_any_other_tool_clears_the_selection() {
        for tool in [
            Tool::Select,
            Tool::Move,
            Tool::Rectangle,
            Tool::Circle,
            Tool::Text,
            Tool::Image,
        ] {
            assert_eq!(background_click_action(tool), SurfaceClick::ClearSelection);
        }
    }

    #[test]
    fn only_the_select_tool_picks_up_elements() {
        assert!(element_click_selects(Tool::Select));
        for tool in [
            Tool::Move,
            Tool::Rectangle,
            Tool::Circle,
            Tool::Text,
            Tool::Image,
            Tool::Comment,
        ] {
            assert!(!element_click_selects(tool));
        }
    }
}
