/// Usage text emitted by the `help` command, one line per entry
pub const HELP_TEXT: &[&str] = &[
    "  *** Available commands ***",
    "Entire cube:",
    "  all <colour>;                                        (eg: 'all RED;', or 'all ff0000;')",
    "  shift <axis> <direction>;                            (eg: 'shift X +;', or 'shift Y -;')",
    "Single LED:",
    "  set <location> <colour>;                             (eg: 'set 112 GREEN;', or 'set 112 00ff00;')",
    "  next <colour>;                                       (eg: 'next BLUE;', or 'next 0000ff;')",
    "One axis:",
    "  setplane <axis> <offset> <colour>;                   (eg: 'setplane X 2 BLUE;', or 'setplane Y 1 00ff00;')",
    "  copyplane <axis> <from offset> <to offset>;          (eg: 'copyplane X 2 1;')",
    "  moveplane <axis> <from offset> <to offset> <colour>; (eg: 'moveplane Z 1 3 BLACK;')",
    "Graphics and shapes:",
    "  line <location1> <location2> <colour>;               (eg: 'line 000 333 RED;')",
    "  box <location1> <location2> <colour> [<style>] [<fill>]; (eg: 'box 000 333 GREEN;', or 'box 000 333 00ff00 3 ffffff;')",
    "      style 0-4: solid, walls only, edges only, walls filled, edges filled",
    "  sphere <location> <size> <colour> [<fill>];          (eg: 'sphere 111 2 BLUE;', or 'sphere 111 2 0000ff ffffff;')",
    "Locations are three digits (x, y, z), offsets one digit; 'h' hides a voxel.",
    "Supported colour aliases:",
    "  BLACK BLUE GREEN ORANGE PINK PURPLE RED WHITE YELLOW",
];
