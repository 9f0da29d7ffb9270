pub mod file_selector;
pub mod review;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Rendered rows as plain strings.
    pub(crate) fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    pub(crate) fn contains(buffer: &Buffer, needle: &str) -> bool {
        buffer_lines(buffer).iter().any(|line| line.contains(needle))
    }
}
