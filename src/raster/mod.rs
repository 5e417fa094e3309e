pub mod blur;
pub mod canvas;
pub mod composite;
pub mod mask;
