mod host_tile;
pub use host_tile::{HostTile, TileGrid};

mod locale_switcher;
pub use locale_switcher::LocaleSwitcher;

mod status_panel;
pub use status_panel::StatusPanel;

mod tooltip;
pub use tooltip::Tooltip;
