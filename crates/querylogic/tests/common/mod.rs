//! In-memory mock database client driving the materializer tests.
#![allow(dead_code)]

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

use querylogic::Value;
use querylogic::client::{
    AsyncConnection, AsyncResultCursor, CellReader, ClientResult, ColumnDescriptor, Command,
    Connection, CursorBehavior, ResultCursor,
};

/// One canned result set: a schema plus records of pre-typed cells.
#[derive(Debug, Clone, Default)]
pub struct MockResultSet {
    pub schema: Vec<ColumnDescriptor>,
    pub records: Vec<Vec<Value>>,
}

impl MockResultSet {
    pub fn new(columns: &[(&str, &str)]) -> Self {
        Self {
            schema: columns
                .iter()
                .enumerate()
                .map(|(ordinal, (name, type_name))| ColumnDescriptor {
                    name: (*name).to_owned(),
                    type_name: (*type_name).to_owned(),
                    ordinal,
                })
                .collect(),
            records: Vec::new(),
        }
    }

    pub fn record(mut self, cells: Vec<Value>) -> Self {
        self.records.push(cells);
        self
    }
}

/// Cursor over canned result sets. Positioned before the first record of
/// the first set; `advance` moves onto records, `next_result` onto sets.
#[derive(Debug)]
pub struct MockCursor {
    sets: Vec<MockResultSet>,
    set_index: usize,
    record_index: Option<usize>,
}

impl MockCursor {
    fn new(sets: Vec<MockResultSet>) -> Self {
        Self {
            sets,
            set_index: 0,
            record_index: None,
        }
    }

    fn cell(&self, ordinal: usize) -> &Value {
        let record = self.record_index.expect("cursor not positioned on a record");
        &self.sets[self.set_index].records[record][ordinal]
    }

    fn advance_record(&mut self) -> bool {
        let next = self.record_index.map_or(0, |index| index + 1);
        if next < self.sets[self.set_index].records.len() {
            self.record_index = Some(next);
            true
        } else {
            false
        }
    }

    fn advance_set(&mut self) -> bool {
        if self.set_index + 1 < self.sets.len() {
            self.set_index += 1;
            self.record_index = None;
            true
        } else {
            false
        }
    }
}

impl CellReader for MockCursor {
    fn schema(&self) -> &[ColumnDescriptor] {
        &self.sets[self.set_index].schema
    }

    fn is_null(&self, ordinal: usize) -> ClientResult<bool> {
        Ok(self.cell(ordinal).is_null())
    }

    fn get_i16(&self, ordinal: usize) -> ClientResult<i16> {
        Ok(self.cell(ordinal).as_i16())
    }

    fn get_i32(&self, ordinal: usize) -> ClientResult<i32> {
        Ok(self.cell(ordinal).as_i32())
    }

    fn get_i64(&self, ordinal: usize) -> ClientResult<i64> {
        Ok(self.cell(ordinal).as_i64())
    }

    fn get_byte(&self, ordinal: usize) -> ClientResult<u8> {
        Ok(self.cell(ordinal).as_byte())
    }

    fn get_identifier(&self, ordinal: usize) -> ClientResult<Uuid> {
        Ok(self.cell(ordinal).as_identifier())
    }

    fn get_decimal(&self, ordinal: usize) -> ClientResult<BigDecimal> {
        Ok(self.cell(ordinal).as_decimal())
    }

    fn get_timestamp(&self, ordinal: usize) -> ClientResult<NaiveDateTime> {
        Ok(self.cell(ordinal).as_timestamp())
    }

    fn get_duration(&self, ordinal: usize) -> ClientResult<TimeDelta> {
        Ok(self.cell(ordinal).as_duration())
    }

    fn get_string(&self, ordinal: usize) -> ClientResult<String> {
        Ok(self.cell(ordinal).as_text().to_owned())
    }

    fn get_bool(&self, ordinal: usize) -> ClientResult<bool> {
        Ok(self.cell(ordinal).as_bool())
    }

    fn read_bytes(
        &self,
        ordinal: usize,
        offset: u64,
        buffer: Option<&mut [u8]>,
    ) -> ClientResult<u64> {
        let bytes = self.cell(ordinal).as_bytes();
        match buffer {
            None => Ok(bytes.len() as u64),
            Some(buf) => {
                let start = offset as usize;
                let count = buf.len().min(bytes.len().saturating_sub(start));
                buf[..count].copy_from_slice(&bytes[start..start + count]);
                Ok(count as u64)
            }
        }
    }
}

impl ResultCursor for MockCursor {
    fn advance(&mut self) -> ClientResult<bool> {
        Ok(self.advance_record())
    }

    fn next_result(&mut self) -> ClientResult<bool> {
        Ok(self.advance_set())
    }
}

#[async_trait]
impl AsyncResultCursor for MockCursor {
    async fn advance(&mut self) -> ClientResult<bool> {
        Ok(self.advance_record())
    }

    async fn next_result(&mut self) -> ClientResult<bool> {
        Ok(self.advance_set())
    }
}

/// Connection returning canned result sets, with hooks for failure
/// injection and close/behavior observation.
#[derive(Debug, Default)]
pub struct MockConnection {
    pub sets: Vec<MockResultSet>,
    /// When set, execution fails with this message.
    pub fail_with: Option<String>,
    /// Affected-row count reported by non-query execution.
    pub affected: u64,
    /// Output values written back into the command after non-query
    /// execution, keyed by prefixed parameter name.
    pub output_values: Vec<(String, Value)>,
    pub open_count: usize,
    pub closed: bool,
    pub last_behavior: Option<CursorBehavior>,
}

impl MockConnection {
    pub fn with_sets(sets: Vec<MockResultSet>) -> Self {
        Self {
            sets,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn make_cursor(&mut self, behavior: CursorBehavior) -> ClientResult<MockCursor> {
        self.last_behavior = Some(behavior);
        match &self.fail_with {
            Some(message) => Err(message.clone().into()),
            None => Ok(MockCursor::new(self.sets.clone())),
        }
    }

    fn run_non_query(&mut self, command: &mut Command) -> ClientResult<u64> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        for parameter in command.parameters_mut() {
            if let Some((_, value)) = self
                .output_values
                .iter()
                .find(|(name, _)| *name == parameter.name)
            {
                parameter.value = value.clone();
            }
        }
        Ok(self.affected)
    }
}

impl Connection for MockConnection {
    fn open(&mut self) -> ClientResult<()> {
        self.open_count += 1;
        self.closed = false;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn execute_reader(
        &mut self,
        _command: &Command,
        behavior: CursorBehavior,
    ) -> ClientResult<Box<dyn ResultCursor + '_>> {
        Ok(Box::new(self.make_cursor(behavior)?))
    }

    fn execute_non_query(&mut self, command: &mut Command) -> ClientResult<u64> {
        self.run_non_query(command)
    }
}

#[async_trait]
impl AsyncConnection for MockConnection {
    async fn open(&mut self) -> ClientResult<()> {
        self.open_count += 1;
        self.closed = false;
        Ok(())
    }

    async fn close(&mut self) {
        self.closed = true;
    }

    async fn execute_reader(
        &mut self,
        _command: &Command,
        behavior: CursorBehavior,
    ) -> ClientResult<Box<dyn AsyncResultCursor + '_>> {
        Ok(Box::new(self.make_cursor(behavior)?))
    }

    async fn execute_non_query(&mut self, command: &mut Command) -> ClientResult<u64> {
        self.run_non_query(command)
    }
}
