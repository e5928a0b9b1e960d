// Input events delivered by the host engine and the movement-key state they drive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown,
    // Relative pointer movement; only meaningful while the pointer is locked.
    PointerMove { movement_x: f32, movement_y: f32 },
}

/// Which of the WASD movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::W => self.up = held,
            Key::S => self.down = held,
            Key::A => self.left = held,
            Key::D => self.right = held,
            Key::Q => {}
        }
    }
}
