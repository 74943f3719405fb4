use dioxus::prelude::*;

use crate::components::Tooltip;
use crate::panel::{GridLayout, TileFill, TileSize, TileView};
use crate::t;
use crate::theme::{styles, Theme};

#[component]
pub fn TileGrid(layout: GridLayout, tiles: Vec<TileView>, theme: Theme) -> Element {
    let grid_class = if layout.overflow {
        "tile-grid tile-grid--overflow"
    } else {
        "tile-grid"
    };
    let grid_style = styles::grid_style(&layout);

    rsx! {
        div { class: grid_class, style: "{grid_style}",
            for tile in tiles.into_iter() {
                HostTile {
                    key: "{tile.index}",
                    size: layout.size,
                    theme: theme.clone(),
                    tile,
                }
            }
        }
    }
}

#[component]
pub fn HostTile(tile: TileView, size: TileSize, theme: Theme) -> Element {
    let tile_style = styles::tile_style(&theme, &size, tile.color());
    let size_class = size.class.css_class();

    let body = match &tile.fill {
        TileFill::NoData => rsx! {
            div { class: "host-tile host-tile--empty {size_class}", style: "{tile_style}",
                span { class: "sr-only", {t!("tile-no-data")} }
            }
        },
        TileFill::Value(_) => rsx! {
            div { class: "host-tile {size_class}", style: "{tile_style}",
                span { class: "sr-only", "{tile.name}" }
            }
        },
    };

    let body = match tile.link.as_ref() {
        Some(link) => rsx! {
            a {
                class: "host-tile__link",
                href: "{link.href}",
                target: link.target.as_attr(),
                rel: link.rel(),
                title: "{link.title}",
                {body}
            }
        },
        None => body,
    };

    rsx! {
        Tooltip {
            theme: theme.clone(),
            content: rsx! {
                TileTooltip { tile: tile.clone(), theme: theme.clone() }
            },
            {body}
        }
    }
}

#[component]
fn TileTooltip(tile: TileView, theme: Theme) -> Element {
    let header_style = styles::tooltip_header_style(&theme);
    let no_data = t!("tile-no-data");

    rsx! {
        div { class: "tile-tooltip",
            h3 { class: "tile-tooltip__title", "{tile.name}" }
            table { class: "tile-tooltip__table",
                thead {
                    tr {
                        th { style: "{header_style}", {t!("tooltip-name")} }
                        th { style: "{header_style}", {t!("tooltip-value")} }
                    }
                }
                tbody {
                    for (row_index, row) in tile.rows.iter().enumerate() {
                        tr { key: "{row_index}",
                            td { "{row.ref_id}" }
                            td { {row.formatted().unwrap_or_else(|| no_data.clone())} }
                        }
                    }
                }
            }
        }
    }
}
