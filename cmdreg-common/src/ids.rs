//! Canonical dispatch identifiers shared by the registry and its collaborators.

/// Internal dispatch identifier for one command or command family.
///
/// Most variants route exactly one command name. `HashObject`, `ListObject`, `SetObject` and
/// `SortedSetObject` are multiplexed families whose member commands are told apart by an
/// operation code. `All` is the catch-all identifier.
///
/// Byte values (here and in the operation enums) are declaration positions local to this crate.
/// They do not match any server's wire or internal numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CommandId {
    Acl,
    Append,
    Asking,
    Auth,
    Bgsave,
    Bitcount,
    Bitfield,
    Bitop,
    Bitpos,
    Client,
    Cluster,
    Command,
    Commitaof,
    Config,
    Coscan,
    Dbsize,
    Decr,
    Decrby,
    Del,
    Discard,
    Echo,
    Exec,
    Exists,
    Expire,
    Flushdb,
    Get,
    Getbit,
    Getdel,
    Getrange,
    Incr,
    Incrby,
    Info,
    Keys,
    Lastsave,
    Latency,
    Memory,
    Mget,
    Migrate,
    Module,
    Monitor,
    Mset,
    Msetnx,
    Multi,
    Persist,
    Pexpire,
    Pfadd,
    Pfcount,
    Pfmerge,
    Ping,
    Psetex,
    Psubscribe,
    Pttl,
    Publish,
    Punsubscribe,
    Quit,
    Readonly,
    Registercs,
    Rename,
    Replicaof,
    Reset,
    Save,
    Scan,
    /// Legacy `SLAVEOF` spelling of replica assignment.
    Secondaryof,
    Select,
    Set,
    Setbit,
    Setex,
    Setexnx,
    Setexxx,
    Setrange,
    Strlen,
    Subscribe,
    Time,
    Ttl,
    Type,
    Unlink,
    Unsubscribe,
    Unwatch,
    Watch,
    /// Hash family dispatch.
    HashObject,
    /// List family dispatch.
    ListObject,
    /// Set family dispatch.
    SetObject,
    /// Sorted-set family dispatch, geo commands included.
    SortedSetObject,
    /// Catch-all identifier.
    All,
}

impl CommandId {
    /// Returns the byte value of this identifier.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns true for identifiers shared by a multiplexed family.
    #[must_use]
    pub const fn is_family(self) -> bool {
        matches!(
            self,
            Self::HashObject | Self::ListObject | Self::SetObject | Self::SortedSetObject
        )
    }
}

/// Operation codes inside the hash family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HashOperation {
    Hdel,
    Hexists,
    Hget,
    Hgetall,
    Hincrby,
    Hincrbyfloat,
    Hkeys,
    Hlen,
    Hmget,
    Hmset,
    Hrandfield,
    Hscan,
    Hset,
    Hsetnx,
    Hstrlen,
    Hvals,
}

/// Operation codes inside the list family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ListOperation {
    Lindex,
    Linsert,
    Llen,
    Lmove,
    Lpop,
    Lpush,
    Lpushx,
    Lrange,
    Lrem,
    Ltrim,
    Rpop,
    Rpoplpush,
    Rpush,
    Rpushx,
}

/// Operation codes inside the set family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SetOperation {
    Sadd,
    Scard,
    Sismember,
    Smembers,
    Spop,
    Srandmember,
    Srem,
    Sscan,
}

/// Operation codes inside the sorted-set family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SortedSetOperation {
    Geoadd,
    Geodist,
    Geohash,
    Geopos,
    Geosearch,
    Zadd,
    Zcard,
    Zcount,
    Zdiff,
    Zincrby,
    Zlexcount,
    Zmscore,
    Zpopmax,
    Zpopmin,
    Zrandmember,
    Zrange,
    Zrangebyscore,
    Zrank,
    Zrem,
    Zremrangebylex,
    Zremrangebyrank,
    Zremrangebyscore,
    Zrevrange,
    Zrevrank,
    Zscan,
    Zscore,
}

macro_rules! impl_operation_code {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Returns the byte value of this operation code.
                #[must_use]
                pub const fn code(self) -> u8 {
                    self as u8
                }
            }
        )+
    };
}

impl_operation_code!(HashOperation, ListOperation, SetOperation, SortedSetOperation);
