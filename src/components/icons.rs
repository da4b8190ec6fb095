use dioxus::prelude::*;

/// Inline SVG icon by name; unknown names draw a plain circle.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let svg_content = match name.as_str() {
        "play" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        "pause" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect {
                    x: "6",
                    y: "4",
                    width: "4",
                    height: "16",
                }
                rect {
                    x: "14",
                    y: "4",
                    width: "4",
                    height: "16",
                }
            }
        },
        "prev" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "19 20 9 12 19 4 19 20" }
                line {
                    x1: "5",
                    y1: "19",
                    x2: "5",
                    y2: "5",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        "next" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line {
                    x1: "19",
                    y1: "5",
                    x2: "19",
                    y2: "19",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        "stop" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect {
                    x: "5",
                    y: "5",
                    width: "14",
                    height: "14",
                    rx: "2",
                }
            }
        },
        "shuffle" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "16 3 21 3 21 8" }
                line {
                    x1: "4",
                    y1: "20",
                    x2: "21",
                    y2: "3",
                }
                polyline { points: "21 16 21 21 16 21" }
                line {
                    x1: "15",
                    y1: "15",
                    x2: "21",
                    y2: "21",
                }
                line {
                    x1: "4",
                    y1: "4",
                    x2: "9",
                    y2: "9",
                }
            }
        },
        "refresh" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "23 4 23 10 17 10" }
                path { d: "M20.49 15a9 9 0 1 1-2.12-9.36L23 10" }
            }
        },
        "upload" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
                polyline { points: "17 8 12 3 7 8" }
                line {
                    x1: "12",
                    y1: "3",
                    x2: "12",
                    y2: "15",
                }
            }
        },
        "music" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M9 18V5l12-2v13" }
                circle { cx: "6", cy: "18", r: "3" }
                circle { cx: "18", cy: "16", r: "3" }
            }
        },
        "x" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                line {
                    x1: "18",
                    y1: "6",
                    x2: "6",
                    y2: "18",
                }
                line {
                    x1: "6",
                    y1: "6",
                    x2: "18",
                    y2: "18",
                }
            }
        },
        "loader" => rsx! {
            svg {
                class: "{class} animate-spin",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10",
                    opacity: "0.25",
                }
                path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    };

    svg_content
}
