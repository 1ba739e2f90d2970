/// Input collaborator for the 16 key pad. The machine polls it while
/// executing the key instructions and owns no key state itself.
pub trait Keypad {
    /// Whether logical key `key` (`0x0` through `0xF`) is currently held.
    fn is_pressed(&self, key: u8) -> bool;

    /// Block until a key press arrives and return the logical key. The
    /// wait-for-key instruction calls this, so a blocking implementation
    /// stalls the machine exactly as long as that instruction should.
    fn wait_press(&mut self) -> u8;
}
