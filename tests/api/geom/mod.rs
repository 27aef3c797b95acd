mod geometrycollection;
mod line;
mod multilinestring;
mod multipoint;
mod plotter;
mod point;
mod rect;
mod solvent;
mod to_cells;
mod to_geo;
