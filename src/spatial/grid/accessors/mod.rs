mod checked;
mod coords;
mod flat;
